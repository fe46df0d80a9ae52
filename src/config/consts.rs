// src/config/consts.rs
use crate::core::html::Step;

// Net config
pub const BASE_URL: &str = "https://servizionline.unige.it/unige/stampa_manifesto/MF/2024/8759.html";
pub const USER_AGENT: &str = concat!("unige_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Catalog page: /html/body/div/div[4]/div[3]/table
pub const TABLE_PATH: &[Step] = &[
    Step::any("body"),
    Step::any("div"),
    Step::nth("div", 4),
    Step::nth("div", 3),
    Step::any("table"),
];

// Column holding a list of values (joined with ", " instead of " ")
pub const MULTI_VALUE_COLUMN: usize = 5;

// Linked course pages: heading of the exam section, Italian first
pub const EXAM_LABELS: &[&str] = &["MODALITA' D'ESAME", "EXAM DESCRIPTION"];

// Filter
pub const BLACKLIST: &[&str] = &["insegnamenti", "ateneo"];

// Export
pub const EXAM_COLUMN: &str = "Modalità d'esame";
pub const DEFAULT_OUT_STEM: &str = "output";
