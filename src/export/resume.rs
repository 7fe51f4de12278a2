//! HTML resume generation
//!
//! Builds a standalone document with inlined CSS from the profile.
//! Every interpolated field is escaped; profile text is data here, not
//! markup.

use std::fmt::Write;

use crate::models::Profile;

/// Render the downloadable resume document.
pub fn render_resume(profile: &Profile) -> String {
    let mut skills = String::new();
    for skill in &profile.skills {
        let _ = write!(
            skills,
            r#"<span class="skill-tag">{}</span>"#,
            escape_html(&skill.name)
        );
    }

    let mut experience = String::new();
    for exp in &profile.experience {
        let mut bullets = String::new();
        for line in &exp.description {
            let _ = write!(bullets, "<li>{}</li>", escape_html(line));
        }
        let mut tech = String::new();
        for t in &exp.technologies {
            let _ = write!(tech, r#"<span class="skill-tag">{}</span>"#, escape_html(t));
        }
        let _ = write!(
            experience,
            r#"
        <div class="experience-item">
            <h3>{title}</h3>
            <div class="company">{company}</div>
            <div class="period">{period} | {location}</div>
            <ul>{bullets}</ul>
            <div class="skills">{tech}</div>
        </div>"#,
            title = escape_html(&exp.title),
            company = escape_html(&exp.company),
            period = escape_html(&exp.period),
            location = escape_html(&exp.location),
            bullets = bullets,
            tech = tech,
        );
    }

    let mut education = String::new();
    for edu in &profile.education {
        let _ = write!(
            education,
            r#"
        <div class="experience-item">
            <h3>{degree}</h3>
            <div class="company">{school}</div>
            <div class="period">{period}</div>
            <p>{description}</p>
        </div>"#,
            degree = escape_html(&edu.degree),
            school = escape_html(&edu.school),
            period = escape_html(&edu.period),
            description = escape_html(&edu.description),
        );
    }

    let mut certifications = String::new();
    for cert in &profile.certifications {
        let _ = write!(certifications, "<li>{}</li>", escape_html(cert));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-TW">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - 履歷</title>
    <style>
        body {{ font-family: 'Microsoft JhengHei', sans-serif; line-height: 1.6; color: #333; max-width: 800px; margin: 0 auto; padding: 20px; }}
        .header {{ text-align: center; border-bottom: 2px solid #0B5FFF; padding-bottom: 20px; margin-bottom: 30px; }}
        .header h1 {{ color: #0B5FFF; margin: 0; }}
        .section {{ margin-bottom: 30px; }}
        .section h2 {{ color: #0B5FFF; border-bottom: 1px solid #ddd; padding-bottom: 5px; }}
        .experience-item {{ margin-bottom: 20px; }}
        .experience-item h3 {{ margin: 0; color: #333; }}
        .experience-item .company {{ color: #0B5FFF; font-weight: bold; }}
        .experience-item .period {{ color: #666; font-size: 0.9em; }}
        .skills {{ display: flex; flex-wrap: wrap; gap: 10px; }}
        .skill-tag {{ background: #f0f8ff; color: #0B5FFF; padding: 5px 10px; border-radius: 15px; font-size: 0.9em; }}
        ul {{ padding-left: 20px; }}
        li {{ margin-bottom: 5px; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>{name}</h1>
        <p>{title}</p>
        <p>Email: {email} | GitHub: {github} | LinkedIn: {linkedin}</p>
    </div>

    <div class="section">
        <h2>關於我</h2>
        <p>{bio}</p>
    </div>

    <div class="section">
        <h2>技能專長</h2>
        <div class="skills">{skills}</div>
    </div>

    <div class="section">
        <h2>工作經歷</h2>{experience}
    </div>

    <div class="section">
        <h2>學歷背景</h2>{education}
    </div>

    <div class="section">
        <h2>專業認證</h2>
        <ul>{certifications}</ul>
    </div>
</body>
</html>
"#,
        name = escape_html(&profile.name),
        title = escape_html(&profile.title),
        email = escape_html(&profile.email),
        github = escape_html(&profile.github),
        linkedin = escape_html(&profile.linkedin),
        bio = escape_html(&profile.bio),
        skills = skills,
        experience = experience,
        education = education,
        certifications = certifications,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
