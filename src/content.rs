//! Static page content: profile, skills, work history, projects, education
//! and contact details. Everything here is immutable.

use std::time::{SystemTime, UNIX_EPOCH};

pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Experience {
    pub company: &'static str,
    pub location: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

/// A gallery entry.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub source: Option<&'static str>,
    pub live: Option<&'static str>,
    pub featured: bool,
}

/// Cards show this many tags before collapsing the rest into `+N`
pub const CARD_TAG_LIMIT: usize = 3;

impl ProjectRecord {
    /// Tags shown on a gallery card, plus how many were left out.
    pub fn card_tags(&self) -> (&'static [&'static str], Option<usize>) {
        if self.tags.len() > CARD_TAG_LIMIT {
            (
                &self.tags[..CARD_TAG_LIMIT],
                Some(self.tags.len() - CARD_TAG_LIMIT),
            )
        } else {
            (self.tags, None)
        }
    }
}

pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub certificate: Option<Link>,
}

pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const PROFILE: Profile = Profile {
    name: "Youssouf Yogue",
    initials: "YY",
    headline: "Full-Stack Software Engineer",
    tagline: "Building meaningful software that solves real-world problems with React, Node.js, and cloud technologies.",
    about: &[
        "Dedicated Full-Stack Software Engineer and Cloud Computing student at Purdue University with a passion for building meaningful software that solves real-world problems. Skilled in React.js, Node.js, and Java with growing expertise in Python and backend system design.",
        "Known for being a fast learner, team-oriented, and relentlessly curious. Actively building tools that make teams more efficient and systems more scalable. Eager to bring hands-on experience, a strong problem-solving mindset, and a deep hunger to grow into a collaborative engineering team.",
    ],
};

pub const EMAIL_HREF: &str = "mailto:yousyogue@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/yyogue";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/youssouf-yogue";

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &["React.js", "React Native", "Redux", "JavaScript (ES6+)", "HTML5", "CSS3", "SCSS"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["Node.js", "Express.js", "Java (Spring Boot)", "Python", "RESTful APIs"],
    },
    SkillCategory {
        title: "Databases",
        skills: &["MongoDB", "MySQL", "Firebase"],
    },
    SkillCategory {
        title: "Tools & DevOps",
        skills: &["Git & GitHub", "Docker", "Postman", "GitHub Actions (CI/CD)", "Agile/Scrum"],
    },
    SkillCategory {
        title: "Cloud & Development",
        skills: &["AWS", "Azure", "Google Cloud", "Docker", "Kubernetes"],
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Jabil",
        location: "Florence, KY",
        title: "Line Lead IT Diagnostic Technician",
        period: "Feb 2025 - Present",
        highlights: &[
            "Lead daily technical operations on hardware diagnostics; performed root-cause analysis on PCB assemblies.",
            "Acted as a communication bridge between production staff and engineering leadership.",
            "Proposed a search-driven AI assistant to help technicians resolve issues faster by detecting patterns and routing problems to the right person or group.",
            "Work closely with the Test Engineering team to continuously analyze and improve diagnostic accuracy.",
        ],
    },
    Experience {
        company: "Dec Consult",
        location: "Kinshasa, D.R. Congo",
        title: "Full-Stack Software Consultant (Contract)",
        period: "Aug 2024 - Jan 2025",
        highlights: &[
            "Delivered a full-stack Employee Management System using React.js, Node.js, and MongoDB.",
            "Customized and deployed the platform, trained staff, and worked with local developers to support integration and maintenance.",
            "Supported a team with mostly WordPress experience, helping them understand JavaScript stack fundamentals.",
        ],
    },
    Experience {
        company: "American Express",
        location: "Sunrise, FL",
        title: "Software Engineer III",
        period: "May 2022 - Aug 2024",
        highlights: &[
            "Built and maintained web apps using React.js with an emphasis on performance, accessibility, and modularity.",
            "Refactored large codebases, uplifted dependencies, and improved CI/CD workflows, reducing deployment times.",
            "Provided mentorship to incoming junior devs, offering guidance on how to find support, learn quickly, and deliver with confidence.",
            "Developed and supported backend features using Node.js and Spring Boot, gradually expanding to full-stack development.",
        ],
    },
];

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "Congondaku.com",
        description: "Real estate platform with localized African payment solutions (Orange Money). Built with React, Node.js, MongoDB, and AWS services.",
        long_description: "This real estate platform was designed specifically for the African market, incorporating local payment methods like Orange Money. The frontend was built with React.js, creating a responsive and intuitive user interface. The backend utilizes Node.js with Express, connected to MongoDB for flexible data storage. Images are stored in AWS S3 buckets for efficient delivery, and the entire application is deployed using AWS Amplify for the frontend and Render for the backend services. The CI/CD pipeline ensures smooth updates with every commit.",
        tags: &["React.js", "Node.js", "MongoDB", "AWS S3", "AWS Amplify", "Render"],
        image: "placeholder/600x400",
        source: None,
        live: Some("https://congondaku.com"),
        featured: true,
    },
    ProjectRecord {
        id: 2,
        title: "Employee Management System",
        description: "Full-stack system for employee management using React.js, Node.js, and MongoDB.",
        long_description: "This comprehensive employee management system provides tools for HR departments to track employee data, attendance, performance reviews, and more. The React frontend delivers an intuitive dashboard with data visualization components, while the Node.js backend provides a robust API layer. MongoDB stores employee records in a flexible schema that can adapt to different organizational structures. Authentication and authorization are handled with JSON Web Tokens for secure access control.",
        tags: &["React.js", "Node.js", "MongoDB", "Express.js"],
        image: "placeholder/600x400",
        source: Some("https://github.com/yyogue/employee-management-system"),
        live: None,
        featured: false,
    },
    ProjectRecord {
        id: 3,
        title: "Youssouf Store",
        description: "E-commerce platform built with modern web technologies.",
        long_description: "A complete e-commerce solution featuring product listings, shopping cart functionality, user accounts, and order processing. The frontend utilizes React.js with Redux for state management, creating a seamless shopping experience. The Node.js backend handles product data, user authentication, and order processing. MongoDB stores flexible product data with rich attributes and categories. The responsive design ensures a consistent experience across desktop and mobile devices.",
        tags: &["React.js", "Node.js", "MongoDB", "Redux"],
        image: "placeholder/600x400",
        source: Some("https://github.com/yyogue/youssouf-store"),
        live: Some("http://youssoufstore.com"),
        featured: false,
    },
    ProjectRecord {
        id: 4,
        title: "Hackathon App",
        description: "Application built during a hackathon event.",
        long_description: "This application was developed during a 48-hour hackathon event, showcasing rapid prototyping and problem-solving skills. The app provides a platform for tracking health metrics and providing personalized wellness recommendations. It features Firebase integration for real-time data synchronization and user authentication. The React frontend includes data visualization components to help users understand their health trends over time.",
        tags: &["React.js", "Firebase", "API Integration"],
        image: "placeholder/600x400",
        source: Some("https://github.com/yyogue/hackathon-app"),
        live: Some("https://hackathon-prudential.netlify.app"),
        featured: false,
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "Purdue University Global",
        degree: "Bachelor of Science in Cloud Computing",
        period: "Expected Graduation: 2027",
        certificate: None,
    },
    Education {
        institution: "Multiverse US, Inc.",
        degree: "Software Engineering Apprenticeship",
        period: "Completed: August 2023",
        certificate: Some(Link {
            label: "View Certificate",
            url: "https://www.dropbox.com/scl/fi/c97knw2yifxozhu4zup6y/Apprentice-Electronic-Completion-Certificate-Yogue-Youssouf-ZA2022053682-24120096.pdf",
        }),
    },
];

pub const CONTACTS: &[ContactItem] = &[
    ContactItem {
        label: "Location",
        value: "Florence, KY 41042",
        href: None,
    },
    ContactItem {
        label: "Phone",
        value: "(954) 716-5510",
        href: Some("tel:+19547165510"),
    },
    ContactItem {
        label: "Email",
        value: "yousyogue@gmail.com",
        href: Some(EMAIL_HREF),
    },
    ContactItem {
        label: "GitHub",
        value: "github.com/yyogue",
        href: Some(GITHUB_URL),
    },
    ContactItem {
        label: "LinkedIn",
        value: "linkedin.com/in/youssouf-yogue",
        href: Some(LINKEDIN_URL),
    },
];

pub fn projects() -> &'static [ProjectRecord] {
    PROJECTS
}

pub fn project(id: u32) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn copyright_line(year: i64) -> String {
    format!("\u{a9} {year} {}. All rights reserved.", PROFILE.name)
}

/// Calendar year (UTC) from the system clock.
pub fn current_year() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    year_from_unix_days(secs.div_euclid(86_400))
}

/// Proleptic Gregorian year containing the given day count since 1970-01-01.
fn year_from_unix_days(days: i64) -> i64 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400;
    if month <= 2 {
        year + 1
    } else {
        year
    }
}
