use resume_pdf::pagesize::Paper;
use resume_pdf::{
    Certification, Education, Experience, PersonalInfo, Project, Renderer, ResumeDocument,
    Skills, Theme,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn main() {
    // build a resume in code; `ResumeDocument::from_json` reads the same record from JSON
    let doc = ResumeDocument {
        personal_info: PersonalInfo {
            name: "Jane Doe".to_string(),
            email: Some("jane.doe@example.com".to_string()),
            phone: Some("+1 555 0100".to_string()),
            location: Some("Portland, OR".to_string()),
            github: Some("github.com/janedoe".to_string()),
            ..Default::default()
        },
        summary: Some(
            "Backend engineer with eight years of experience building storage systems and \
             the tooling around them."
                .to_string(),
        ),
        experience: vec![Experience {
            company: Some("Acme Storage".to_string()),
            position: Some("Senior Engineer".to_string()),
            start_date: Some("03/2019".to_string()),
            end_date: Some("Present".to_string()),
            responsibilities: strings(&[
                "Owned the replication layer of the object store",
                "Mentored four engineers through their first on-call rotations",
            ]),
            achievements: strings(&["Cut p99 write latency by 40%"]),
        }],
        education: vec![Education {
            degree: Some("BSc".to_string()),
            field: Some("Computer Science".to_string()),
            institution: Some("State University".to_string()),
            graduation_year: Some("2016".to_string()),
            ..Default::default()
        }],
        skills: Some(Skills {
            technical: strings(&["Rust", "Go", "PostgreSQL", "Kubernetes"]),
            soft: strings(&["Mentoring", "Technical writing"]),
        }),
        certifications: vec![Certification {
            name: Some("Certified Kubernetes Administrator".to_string()),
            issuer: Some("CNCF".to_string()),
            date: Some("2021".to_string()),
        }],
        projects: vec![Project {
            name: Some("resume-pdf".to_string()),
            description: Some("Lays out resumes as paginated PDF documents.".to_string()),
            technologies: strings(&["Rust", "pdf-writer"]),
            url: Some("https://example.com/resume-pdf".to_string()),
        }],
    };

    // the default theme is A4; swap in US Letter paper and keep everything else
    let renderer = Renderer::new(Theme {
        paper: Paper::Letter,
        ..Default::default()
    });

    // layout and serialization happen in one step
    let pdf = renderer.render_pdf(&doc).unwrap();
    std::fs::write("sample-resume.pdf", pdf).unwrap();
}
