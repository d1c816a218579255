use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose sender address shape: local-part "@" domain "." tld, no whitespace
    /// - Valid: "ana@obra.cl", "a.b+c@mail.example.com"
    /// - Invalid: "ana", "ana@obra", "ana @obra.cl", "@obra.cl"
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Flattened checklist answer key, e.g. `checklistAnswers[1-2]`
    pub static ref CHECKLIST_KEY_REGEX: Regex =
        Regex::new(r"^checklistAnswers\[(\d+)-(\d+)\]$").unwrap();
}
