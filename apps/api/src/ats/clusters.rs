//! Static skill tables used when weaving missing keywords into a resume.
//!
//! Both tables are ordered. Cluster order decides which cluster claims a keyword
//! that several clusters could take; display-name order decides which label wins.

/// A base skill and the related terms that belong next to it.
#[derive(Debug, Clone, Copy)]
pub struct SkillCluster {
    pub base: &'static str,
    pub extras: &'static [&'static str],
}

impl SkillCluster {
    /// A keyword belongs to the cluster if it contains the base or any extra.
    pub fn is_relevant(&self, keyword: &str) -> bool {
        keyword.contains(self.base) || self.extras.iter().any(|e| keyword.contains(e))
    }
}

pub const SKILL_CLUSTERS: &[SkillCluster] = &[
    SkillCluster {
        base: "python",
        extras: &[
            "numpy",
            "pandas",
            "scikit",
            "scikit-learn",
            "sklearn",
            "django",
            "flask",
            "fastapi",
            "tensorflow",
            "pytorch",
        ],
    },
    SkillCluster {
        base: "javascript",
        extras: &["react", "node", "node.js", "vue", "angular", "express"],
    },
    SkillCluster {
        base: "typescript",
        extras: &["react", "node", "nestjs", "next.js", "nextjs"],
    },
    SkillCluster {
        base: "java",
        extras: &["spring", "springboot", "hibernate"],
    },
    SkillCluster {
        base: "csharp",
        extras: &[".net", "asp.net", "entity framework"],
    },
    SkillCluster {
        base: "data",
        extras: &[
            "sql", "nosql", "mongodb", "postgres", "mysql", "etl", "airflow", "dbt",
        ],
    },
    SkillCluster {
        base: "cloud",
        extras: &["aws", "azure", "gcp", "docker", "kubernetes"],
    },
];

/// (substring, label) pairs; first match wins.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("django", "Django framework"),
    ("numpy", "NumPy library"),
    ("react", "React"),
    ("node", "Node.js"),
];

/// Returns the label a keyword is written as in rewritten text.
pub fn display_name(keyword: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(needle, _)| keyword.contains(needle))
        .map(|&(_, label)| label)
        .unwrap_or(keyword)
}
