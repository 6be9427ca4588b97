//! Literal content for the page: profile, skills, experience, education and
//! contact links. Nothing here is loaded at runtime.

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub about: &'static str,
    pub interests: &'static [&'static str],
    pub activities: &'static [&'static str],
}

pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub skills: &'static [Skill],
}

pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub achievements: &'static [Achievement],
}

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub summary: &'static str,
}

pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub text: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Experience,
    Education,
    Contact,
}

impl Section {
    /// Order the sections appear on the page.
    pub const ORDER: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Navbar label, the hero is reached through the brand link instead.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Section::Hero => None,
            Section::About => Some("About"),
            Section::Skills => Some("Skills"),
            Section::Experience => Some("Experience"),
            Section::Education => Some("Education"),
            Section::Contact => Some("Contact"),
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Section::Hero => PROFILE.name,
            Section::About => "About Me",
            Section::Skills => "Skills & Expertise",
            Section::Experience => "Work Experience",
            Section::Education => "Education",
            Section::Contact => "Get In Touch",
        }
    }
}

pub const PROFILE: Profile = Profile {
    name: "Soham Das",
    headline: "AI Engineer & Data Analyst",
    location: "Nagpur, Maharashtra, IN",
    email: "sohamdas1300@gmail.com",
    about: "AI Engineer with a strong foundation in Generative AI, RAG, and AI agentic workflows. \
            Proficient in designing and deploying AI-powered applications using LLMs, LangChain, and \
            cutting-edge frameworks. Adept at integrating AI models into enterprise ecosystems to \
            enhance business intelligence and automation.",
    interests: &["AI & Machine Learning", "Multi-instrumentalist"],
    activities: &[
        "Multi-instrumentalist and music producer with expertise in recording and production using \
         FL Studio. Previously worked commercially in music before transitioning to AI and data science.",
        "Spearheaded as the President of the Official Music Club at Sikkim Manipal Institute of \
         Technology, organizing multiple inter and intra-college music festivals.",
        "Passionate about creating original music and exploring innovative production techniques.",
    ],
};

pub const SKILLS_INTRO: &str = "My technical toolkit spans AI engineering, data analysis, and software \
                                development, with specialized expertise in generative AI and agentic workflows.";

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "ai",
        label: "AI & ML",
        skills: &[
            Skill {
                title: "Generative AI",
                description: "Expert in LLMs, prompt engineering, and generative AI applications",
                level: 95,
            },
            Skill {
                title: "RAG",
                description: "Retrieval Augmented Generation for enhanced AI responses",
                level: 90,
            },
            Skill {
                title: "AI Agentic Workflows",
                description: "Building autonomous AI agents for complex tasks",
                level: 85,
            },
            Skill {
                title: "Prompt Engineering",
                description: "Crafting effective prompts for optimal AI outputs",
                level: 95,
            },
            Skill {
                title: "Synthetic Data Generation",
                description: "Creating synthetic datasets for AI training",
                level: 80,
            },
            Skill {
                title: "Fine-Tuning",
                description: "Customizing pre-trained models for specific tasks",
                level: 85,
            },
        ],
    },
    SkillCategory {
        id: "programming",
        label: "Programming",
        skills: &[
            Skill {
                title: "Python",
                description: "Primary language for AI, data analysis, and backend development",
                level: 95,
            },
            Skill {
                title: "JavaScript",
                description: "Web development and interactive applications",
                level: 85,
            },
            Skill {
                title: "Java",
                description: "Enterprise application development",
                level: 75,
            },
            Skill {
                title: "SQL",
                description: "Database querying and management",
                level: 90,
            },
            Skill {
                title: "HTML",
                description: "Web markup and structure",
                level: 90,
            },
            Skill {
                title: "CSS",
                description: "Web styling and design",
                level: 85,
            },
        ],
    },
    SkillCategory {
        id: "frameworks",
        label: "Frameworks",
        skills: &[
            Skill {
                title: "LangChain",
                description: "Building applications with language models",
                level: 95,
            },
            Skill {
                title: "Llama Index",
                description: "Data framework for LLM applications",
                level: 90,
            },
            Skill {
                title: "AutoGen",
                description: "Framework for building AI agents",
                level: 85,
            },
            Skill {
                title: "Crew AI",
                description: "Multi-agent framework for complex tasks",
                level: 80,
            },
            Skill {
                title: "ReactJS",
                description: "Frontend web development",
                level: 85,
            },
            Skill {
                title: "NodeJS",
                description: "Backend JavaScript runtime",
                level: 80,
            },
        ],
    },
    SkillCategory {
        id: "databases",
        label: "Databases",
        skills: &[
            Skill {
                title: "PostgreSQL",
                description: "Advanced relational database",
                level: 90,
            },
            Skill {
                title: "MySQL",
                description: "Popular relational database",
                level: 85,
            },
            Skill {
                title: "Chroma",
                description: "Vector database for AI applications",
                level: 90,
            },
            Skill {
                title: "Neo4j",
                description: "Graph database for complex relationships",
                level: 85,
            },
        ],
    },
];

pub const EXPERIENCE_INTRO: &str = "My professional journey in AI engineering and data analysis.";

pub const EXPERIENCE: &[Experience] = &[Experience {
    title: "Data Analyst",
    company: "Solar Industries India Ltd",
    location: "Nagpur, Maharashtra",
    period: "October 2023 - Present",
    achievements: &[
        Achievement {
            title: "AI Agentic Applications",
            description: "Designed a LLM-powered application for real-time Root Cause Analysis in \
                          manufacturing plants using RAG frameworks, graph databases, Ollama, and deployed \
                          locally. Reduced downtime by 15% through faster identification and resolution of \
                          production bottlenecks.",
        },
        Achievement {
            title: "Supply Chain Optimization with LLMs",
            description: "Developed an LLM-based application to dynamically adjust constraints for \
                          optimization or scheduling problems solved using Gurobi, enabling real-time \
                          insights into the monetary impact of disruptions or deviations.",
        },
        Achievement {
            title: "Sales Analysis Data Bot",
            description: "Created a localized bot integrated with PostgreSQL to provide actionable insights \
                          into sales data, helping identify trends and outliers for improved decision-making. \
                          Improved sales forecasting accuracy by 25%, increasing revenue predictability and \
                          enabling proactive strategies.",
        },
        Achievement {
            title: "Database Management",
            description: "Built and maintained vector stores (Chroma) and graph databases (Neo4j) for \
                          efficient knowledge retrieval and enhanced AI workflows. Decreased data retrieval \
                          time by 30%, boosting overall query efficiency for internal applications.",
        },
        Achievement {
            title: "Sales Data Pipeline Implementation",
            description: "Spearheaded the creation of a robust sales-data pipeline, enhancing data processing \
                          efficiency and reliability. Automated the process with an AWS Lambda function \
                          triggered daily via AWS Event Bridge. Reduced manual data cleaning efforts by 80%, \
                          saving over 10 hours weekly for the analytics team.",
        },
        Achievement {
            title: "Power BI Dashboard Development",
            description: "Designed and deployed interactive Power BI dashboards to visualize anomalies in sales \
                          data and other operational metrics, enabling data-driven decision-making across \
                          departments.",
        },
    ],
}];

pub const EDUCATION: &[Education] = &[Education {
    degree: "Bachelor of Technology (Information Technology)",
    institution: "Sikkim Manipal Institute of Technology, Majitar",
    period: "June 2018 - June 2022",
    grade: "CGPA: 8.17",
    summary: "Completed a comprehensive program in Information Technology, focusing on programming, data \
              structures, algorithms, and software development. Participated in various technical events \
              and led the college music club.",
}];

pub const CONTACT_INTRO: &str = "Feel free to reach out for collaborations, opportunities, or just to say hello!";

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        href: "mailto:sohamdas1300@gmail.com",
        text: "sohamdas1300@gmail.com",
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/soham-das/",
        text: "linkedin.com/in/soham-das",
    },
    ContactLink {
        label: "GitLab",
        href: "https://gitlab.com/",
        text: "gitlab.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} has no skills", category.id);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} level {}", skill.title, skill.level);
            }
        }
    }

    #[test]
    fn section_ids_are_unique_and_hero_comes_first() {
        assert_eq!(Section::ORDER[0], Section::Hero);
        for (i, a) in Section::ORDER.iter().enumerate() {
            for b in &Section::ORDER[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn every_section_but_hero_is_in_the_nav() {
        let labels: Vec<_> = Section::ORDER.iter().filter_map(|s| s.nav_label()).collect();
        assert_eq!(labels, ["About", "Skills", "Experience", "Education", "Contact"]);
    }
}
