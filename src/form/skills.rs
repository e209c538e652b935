//! Skill catalog used for tag suggestions.

use std::{fs, io, path::Path};

/// Number of suggestions shown under the skill input.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 5;

const DEFAULT_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Vue.js",
    "Angular",
    "Node.js",
    "Python",
    "Django",
    "Flask",
    "Java",
    "Spring Boot",
    "C#",
    ".NET",
    "Go",
    "Rust",
    "Ruby on Rails",
    "PHP",
    "Swift",
    "Kotlin",
    "Flutter",
    "React Native",
    "SQL",
    "PostgreSQL",
    "MongoDB",
    "GraphQL",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "Google Cloud",
    "DevOps",
    "Machine Learning",
    "Data Science",
    "UI/UX Design",
    "Product Management",
    "System Design",
    "Career Coaching",
    "Interview Preparation",
];

/// Reference list of skills, injected into the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

impl SkillCatalog {
    /// Build a catalog, keeping first occurrences and dropping blank names.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog: Vec<String> = Vec::new();
        for skill in skills {
            let skill = skill.as_ref().trim();
            if !skill.is_empty() && !catalog.iter().any(|known| known == skill) {
                catalog.push(skill.to_string());
            }
        }
        Self { skills: catalog }
    }

    /// Read one skill per line. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::new(
            contents
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        ))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone {
        self.skills.iter().map(String::as_str)
    }

    /// Catalog entries containing `query` (case-insensitive) that are not in
    /// `taken`. Lazy and cloneable, so callers can restart or cap it.
    pub fn suggest<'a>(
        &'a self,
        query: &str,
        taken: &'a [String],
    ) -> impl Iterator<Item = &'a str> + Clone + 'a {
        let needle = query.to_lowercase();
        self.iter().filter(move |skill| {
            skill.to_lowercase().contains(&needle) && !taken.iter().any(|owned| owned == skill)
        })
    }
}
