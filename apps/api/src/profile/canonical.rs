use super::{ExperienceEntry, PortfolioProfile, Project, Skills};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(name: &str, description: &str, technologies: &[&str]) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
    }
}

fn position(role: &str, company: &str, duration: &str, description: &str) -> ExperienceEntry {
    ExperienceEntry {
        role: role.to_string(),
        company: company.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
    }
}

/// The built-in profile served when no `PROFILE_PATH` is configured.
pub fn canonical_profile() -> PortfolioProfile {
    PortfolioProfile {
        name: "Vinoth Kumar".to_string(),
        role: "AI/ML Developer".to_string(),
        location: "Coimbatore, Tamil Nadu, India".to_string(),
        experience: "3+ years".to_string(),
        education: "Bachelor's in Computer Science (CGPA: 8.5/10)".to_string(),
        email: "vinothkumar@example.com".to_string(),
        phone: "+91 12345 67890".to_string(),
        skills: Skills {
            programming: strings(&["Python", "JavaScript", "Java", "C++"]),
            ai_ml: strings(&[
                "Machine Learning",
                "Deep Learning",
                "Computer Vision",
                "Natural Language Processing",
            ]),
            frameworks: strings(&["TensorFlow", "PyTorch", "Scikit-learn", "OpenCV"]),
            web: strings(&["HTML", "CSS", "React", "Node.js", "Streamlit"]),
            databases: strings(&["MySQL", "MongoDB", "PostgreSQL"]),
            tools: strings(&["Git", "Docker", "AWS", "Google Cloud"]),
        },
        projects: vec![
            project(
                "AI Chatbot System",
                "Built an intelligent chatbot using NLP and machine learning",
                &["Python", "TensorFlow", "Flask"],
            ),
            project(
                "Computer Vision Analytics",
                "Developed real-time object detection and tracking system",
                &["OpenCV", "YOLO", "Python"],
            ),
            project(
                "Data Analysis Dashboard",
                "Created interactive dashboard for business intelligence",
                &["Python", "Streamlit", "Plotly"],
            ),
            project(
                "E-commerce Recommendation System",
                "Built ML-powered product recommendation engine",
                &["Python", "Scikit-learn", "MongoDB"],
            ),
        ],
        experience_details: vec![
            position(
                "Data Analyst",
                "Ozibook",
                "2022-2024",
                "Analyzed business data and created insights for decision making",
            ),
            position(
                "AI Research Assistant",
                "Universiti Teknologi MARA",
                "2021-2022",
                "Worked on AI/ML research projects and publications",
            ),
        ],
        certifications: strings(&[
            "Machine Learning Specialization - Stanford",
            "Deep Learning Specialization - DeepLearning.AI",
            "AWS Certified Cloud Practitioner",
            "Google Cloud Professional ML Engineer",
            "TensorFlow Developer Certificate",
        ]),
    }
}
