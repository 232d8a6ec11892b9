use serde::{Deserialize, Serialize};

/// How many featured projects the Home "top picks" strip shows
pub const FEATURED_STRIP_LEN: usize = 3;

/// Discipline a project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectKind {
    #[serde(rename = "UX")]
    Ux,
    Animation,
    CaseStudy,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Ux => "UX",
            ProjectKind::Animation => "Animation",
            ProjectKind::CaseStudy => "Case Study",
        }
    }
}

/// Where a project is hosted. Exactly one platform is embeddable in-app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Medium,
    YouTube,
    Web,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Medium,
        Platform::YouTube,
        Platform::Web,
        Platform::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Medium => "Medium",
            Platform::YouTube => "YouTube",
            Platform::Web => "Web",
            Platform::Other => "Other",
        }
    }

    /// Only YouTube material can be shown inline; everything else
    /// gets the outbound-link fallback.
    pub fn is_embeddable(&self) -> bool {
        matches!(self, Platform::YouTube)
    }
}

/// A single portfolio entry. Read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub kind: ProjectKind,
    pub platform: Platform,
    pub external_url: String,
    /// Thumbnail file name under the assets directory
    pub thumbnail: String,
    pub short_description: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub subject: String,
    pub score: u32,
    pub full_mark: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub bio: String,
    pub philosophy: String,
    pub skills: Vec<Skill>,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerKind {
    Work,
    Education,
}

/// One stop on the career timeline. Entries are stored newest-first
/// and rendered in the order given, no re-sorting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerEntry {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub kind: CareerKind,
}

/// Header / contact copy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub marquee: String,
}

/// Everything the page shows. Loaded once at startup; the coordinators
/// only ever read from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub site: Site,
    pub projects: Vec<Project>,
    pub about: About,
    pub career: Vec<CareerEntry>,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Content parse error: {}", e))
    }

    /// The content document compiled into the binary
    pub fn embedded() -> Result<Self, String> {
        Self::from_json(include_str!("../../assets/content.json"))
    }

    pub fn get_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Featured projects in list order, capped to the strip length
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(|p| p.featured)
            .take(FEATURED_STRIP_LEN)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::embedded().unwrap_or(Self {
            site: Site {
                name: "Portfolio".to_string(),
                subtitle: String::new(),
                email: String::new(),
                phone: String::new(),
                linkedin: String::new(),
                marquee: String::new(),
            },
            projects: Vec::new(),
            about: About {
                bio: String::new(),
                philosophy: String::new(),
                skills: Vec::new(),
                tools: Vec::new(),
            },
            career: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();
        assert!(!content.projects.is_empty());
        assert!(!content.about.skills.is_empty());
        assert!(!content.career.is_empty());
        assert_eq!(content.site.name, "Ragesh Changam");
    }

    #[test]
    fn test_featured_strip_is_first_three_flagged() {
        let content = SiteContent::embedded().unwrap();
        let featured: Vec<&Project> = content.featured_projects().collect();
        assert_eq!(featured.len(), FEATURED_STRIP_LEN);
        // List order is preserved, only the flag filters
        let expected: Vec<&Project> = content
            .projects
            .iter()
            .filter(|p| p.featured)
            .take(FEATURED_STRIP_LEN)
            .collect();
        for (a, b) in featured.iter().zip(expected.iter()) {
            assert_eq!(a.id, b.id);
        }
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_exactly_one_embeddable_platform() {
        let embeddable: Vec<Platform> = Platform::ALL
            .iter()
            .copied()
            .filter(|p| p.is_embeddable())
            .collect();
        assert_eq!(embeddable, vec![Platform::YouTube]);
    }

    #[test]
    fn test_career_order_preserved() {
        let content = SiteContent::embedded().unwrap();
        // Newest-first as authored; the first entry is the current role
        assert_eq!(content.career[0].kind, CareerKind::Work);
        assert!(content.career[0].period.contains("Present"));
    }

    #[test]
    fn test_repeated_reads_yield_identical_sets() {
        // Revisiting a tab re-pulls from the same immutable records
        let content = SiteContent::embedded().unwrap();
        let first: Vec<String> = content.projects.iter().map(|p| p.id.clone()).collect();
        let again: Vec<String> = content.projects.iter().map(|p| p.id.clone()).collect();
        assert_eq!(first, again);
        let featured_a: Vec<&str> = content.featured_projects().map(|p| p.id.as_str()).collect();
        let featured_b: Vec<&str> = content.featured_projects().map(|p| p.id.as_str()).collect();
        assert_eq!(featured_a, featured_b);
    }

    #[test]
    fn test_project_lookup() {
        let content = SiteContent::embedded().unwrap();
        let p = content.get_project("proj-02").unwrap();
        assert_eq!(p.platform, Platform::YouTube);
        assert!(p.platform.is_embeddable());
    }
}
