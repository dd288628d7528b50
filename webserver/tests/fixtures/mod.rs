//! Test fixtures for webserver integration tests

#![allow(dead_code)]

use shared::{Course, Prerequisites};

/// Assets shipped in this package, independent of the working directory
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

fn course(dept: &str, number: u32, title: &str, description: &str) -> Course {
    Course {
        dept: dept.to_string(),
        number,
        title: title.to_string(),
        description: description.to_string(),
        prereqs: None,
        cross_listed: Vec::new(),
    }
}

/// Catalog used across the integration tests
pub fn create_test_courses() -> Vec<Course> {
    let mut cis121 = course(
        "CIS",
        121,
        "Programming Languages and Techniques II",
        "Data structures and algorithms in Java.",
    );
    cis121.prereqs = Some(Prerequisites::Many(vec!["CIS 120".into(), "CIS 160".into()]));

    let mut nets112 = course("NETS", 112, "Networked Life", "How social and technological networks work.");
    nets112.cross_listed = vec!["OIDD".into(), "SOCI".into()];

    vec![
        course(
            "CIS",
            120,
            "Programming Languages and Techniques I",
            "A fast-paced introduction to the fundamental concepts of programming.",
        ),
        cis121,
        course("CIS", 160, "Mathematical Foundations of Computer Science", "Proofs, logic and combinatorics."),
        course("CIS", 240, "Introduction to Computer Systems", "Transistors up to C."),
        course("CIS", 320, "Introduction to Algorithms", "Shortest paths and greedy algorithms."),
        course("CIS", 380, "Computer Operating Systems", "Processes and scheduling."),
        course("CIS", 450, "Database and Information Systems", "Relational data and SQL."),
        nets112,
    ]
}
