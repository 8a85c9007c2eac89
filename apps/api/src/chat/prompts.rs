// Prompt and reply templates for the chat module.
// Placeholders are `{name}`-style and filled by `chat::template::render`.

/// Returned when the visitor sends nothing but whitespace.
pub const EMPTY_MESSAGE_PROMPT: &str =
    "👋 Please type a question about my skills, projects, or experience and I'll be happy to help!";

/// Error text for the chat contract when the message parameter is missing or blank.
pub const MESSAGE_REQUIRED_ERROR: &str = "Message parameter is required";

/// System prompt for the completion API. Every profile field is interpolated.
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"You are the AI assistant on {name}'s portfolio website. Answer visitor questions about {name}'s professional background, skills, projects, and experience.

ABOUT {name}:
- Name: {name}
- Role: {role}
- Location: {location}
- Experience: {experience}
- Education: {education}
- Email: {email}
- Phone: {phone}

SKILLS:
{skills_block}

PROJECTS:
{projects_block}

EXPERIENCE:
{experience_block}

CERTIFICATIONS:
{certifications_block}

Instructions:
1. Respond in the first person, speaking on {name}'s behalf
2. Be professional, friendly, and informative
3. If asked about hiring or collaboration, encourage the visitor to contact {name} directly at {email}
4. Keep responses concise: 150 words at most
5. If asked about something not covered above, give a helpful general answer without inventing facts"#;

pub const SKILLS_REPLY: &str = "🚀 {name} specializes in {ai_ml_skills}, {programming_skills}, and more, with {experience} of experience building AI/ML solutions.";

pub const PROJECTS_REPLY: &str = "💼 {name} has worked on projects including {featured_projects}, and many more! Each one showcases hands-on AI/ML and web development work.";

pub const EXPERIENCE_REPLY: &str = "👨‍💻 {name} works as {role} with {experience} of experience, including roles at {recent_employers}.";

pub const EDUCATION_REPLY: &str = "🎓 {name} holds a {education} and has earned {certification_count} professional certifications.";

pub const CONTACT_REPLY: &str = "📧 You can reach {name} at {email} or call {phone}. Based in {location} and open to projects and collaborations!";

pub const GREETING_REPLY: &str = "👋 Hello! I'm {name}'s AI assistant. I'm here to help you learn about {name}'s {experience} of experience. What would you like to know?";

pub const LOCATION_REPLY: &str = "📍 {name} is based in {location} and available for both remote and on-site opportunities!";

pub const DEFAULT_REPLY: &str = "🤖 That's a great question! I'd recommend exploring the portfolio or reaching out to {name} directly at {email} for more detailed information.";
