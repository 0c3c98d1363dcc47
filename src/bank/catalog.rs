//! Display metadata for the built-in subjects.

/// Description and difficulty label for a known subject.
pub struct SubjectInfo {
    pub key: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
}

const CATALOG: [SubjectInfo; 6] = [
    SubjectInfo {
        key: "HTML",
        description: "HyperText Markup Language fundamentals",
        difficulty: "Beginner",
    },
    SubjectInfo {
        key: "CSS",
        description: "Cascading Style Sheets and responsive design",
        difficulty: "Beginner",
    },
    SubjectInfo {
        key: "Python",
        description: "Python programming and object-oriented concepts",
        difficulty: "Intermediate",
    },
    SubjectInfo {
        key: "Java",
        description: "Java programming and OOP principles",
        difficulty: "Intermediate",
    },
    SubjectInfo {
        key: "C",
        description: "C programming language fundamentals",
        difficulty: "Intermediate",
    },
    SubjectInfo {
        key: "C++",
        description: "C++ and advanced object-oriented programming",
        difficulty: "Advanced",
    },
];

impl SubjectInfo {
    /// Look up catalog metadata for a subject key.
    ///
    /// Subjects outside the built-in catalog render without metadata.
    pub fn lookup(key: &str) -> Option<&'static SubjectInfo> {
        CATALOG.iter().find(|info| info.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(SubjectInfo::lookup("HTML").unwrap().difficulty, "Beginner");
        assert!(SubjectInfo::lookup("Fortran").is_none());
    }
}
