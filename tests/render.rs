use resume_pdf::layout::pack_rows;
use resume_pdf::*;

fn mm(value: f32) -> Pt {
    Mm(value).into()
}

fn close(a: Pt, b: Pt) -> bool {
    (a.0 - b.0).abs() < 1e-3
}

fn person(name: &str) -> PersonalInfo {
    PersonalInfo {
        name: name.to_string(),
        ..Default::default()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn record(doc: &ResumeDocument) -> (RecordingSurface, RenderSummary) {
    let mut surface = RecordingSurface::new(pagesize::A4);
    let summary = Renderer::default().render(doc, &mut surface);
    (surface, summary)
}

fn is_header(op: &TextOp) -> bool {
    op.size == Pt(13.0) && op.weight == Weight::Bold
}

fn full_resume() -> ResumeDocument {
    ResumeDocument {
        personal_info: PersonalInfo {
            name: "Alex Morgan".to_string(),
            email: Some("alex.morgan@example.com".to_string()),
            phone: Some("+1 555 0100".to_string()),
            location: Some("Portland, OR".to_string()),
            linkedin: Some("linkedin.com/in/alexmorgan".to_string()),
            github: Some("github.com/alexmorgan".to_string()),
            portfolio: Some("alexmorgan.dev".to_string()),
        },
        summary: Some(lipsum::lipsum(60)),
        experience: (0..4)
            .map(|i| Experience {
                company: Some(format!("Company {i}")),
                position: Some("Senior Engineer".to_string()),
                start_date: Some(format!("01/201{i}")),
                end_date: Some("Present".to_string()),
                responsibilities: vec![lipsum::lipsum(45), lipsum::lipsum(20), lipsum::lipsum(70)],
                achievements: vec![lipsum::lipsum(25)],
            })
            .collect(),
        education: vec![Education {
            degree: Some("BSc".to_string()),
            field: Some("Computer Science".to_string()),
            institution: Some("State University".to_string()),
            graduation_year: Some("2012".to_string()),
            gpa: Some("3.8".to_string()),
            honors: Some("Cum Laude".to_string()),
        }],
        skills: Some(Skills {
            technical: strings(&["Rust", "Go", "PostgreSQL", "Kubernetes"]),
            soft: strings(&["Mentoring", "Writing"]),
        }),
        certifications: (0..3)
            .map(|i| Certification {
                name: Some(format!("Certification {i}")),
                issuer: Some("Issuer".to_string()),
                date: Some("2020".to_string()),
            })
            .collect(),
        projects: (0..3)
            .map(|i| Project {
                name: Some(format!("Project {i}")),
                description: Some(lipsum::lipsum(40)),
                technologies: strings(&["Rust", "Tokio", "gRPC"]),
                url: Some(format!("https://example.com/{i}")),
            })
            .collect(),
    }
}

#[test]
fn every_header_is_followed_by_content() {
    let (surface, summary) = record(&full_resume());
    let texts: Vec<&TextOp> = surface.texts().collect();

    let titles: Vec<&str> = summary.sections.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "PROFESSIONAL SUMMARY",
            "PROFESSIONAL EXPERIENCE",
            "EDUCATION",
            "SKILLS",
            "CERTIFICATIONS",
            "PROJECTS"
        ]
    );

    for (i, op) in texts.iter().enumerate().filter(|(_, op)| is_header(op)) {
        let next = texts.get(i + 1).expect("header is not the last placement");
        assert!(!is_header(next), "{} is followed by another header", op.text);
    }

    let bookmarked: Vec<&str> = surface.bookmarks.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(bookmarked, titles);
}

#[test]
fn absent_sections_leave_no_trace() {
    let doc = ResumeDocument {
        personal_info: person("Sam Lee"),
        summary: Some("\n ".to_string()),
        skills: Some(Skills::default()),
        certifications: vec![Certification::default()],
        projects: vec![],
        ..Default::default()
    };
    let (surface, summary) = record(&doc);

    assert!(summary.sections.is_empty());
    assert_eq!(summary.pages, 1);
    assert_eq!(surface.texts().count(), 1);
    assert!(surface.lines().next().is_none());
}

#[test]
fn nothing_is_placed_past_the_bottom_margin() {
    let (surface, summary) = record(&full_resume());
    assert!(summary.pages > 1);

    let (_, height) = pagesize::A4;
    let bottom = height - mm(15.0);
    for op in surface.texts() {
        assert!(op.y.0 <= bottom.0 + 1e-3, "{:?} is below the margin", op.text);
        assert!(op.y.0 >= mm(15.0).0 - 1e-3, "{:?} is above the margin", op.text);
    }
    for line in surface.lines() {
        assert!((line.from.1).0 <= bottom.0 + 1e-3);
    }

    // section pages never go backwards
    let pages: Vec<usize> = summary.sections.iter().map(|(_, p)| *p).collect();
    assert!(pages.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(surface.page_count(), summary.pages);
}

#[test]
fn contact_items_pack_into_rows() {
    let doc = full_resume();
    let (surface, _) = record(&doc);

    // the name comes first, then every contact item
    let contacts: Vec<&TextOp> = surface.texts().skip(1).take(6).collect();
    assert!(contacts.iter().all(|op| op.size == Pt(9.0)));
    assert_eq!(contacts[0].text, "alex.morgan@example.com");
    assert_eq!(contacts[1].text, "Phone: +1 555 0100");
    assert_eq!(contacts[5].text, "Portfolio: alexmorgan.dev");

    let widths: Vec<Pt> = contacts.iter().map(|op| op.width).collect();
    let content_width = pagesize::A4.0 - mm(30.0);
    let rows = pack_rows(&widths, mm(10.0), content_width);
    assert!(rows.len() > 1);

    let first_y = contacts[0].y;
    for (r, row) in rows.iter().enumerate() {
        let y = first_y + mm(5.0) * r as f32;
        let mut x = mm(15.0);
        for i in row.clone() {
            assert!(close(contacts[i].y, y), "{} is on the wrong row", contacts[i].text);
            assert!(close(contacts[i].x, x), "{} is misplaced", contacts[i].text);
            x += widths[i] + mm(8.0);
        }
    }
}

#[test]
fn missing_contact_items_are_skipped() {
    let doc = ResumeDocument {
        personal_info: PersonalInfo {
            name: "Sam Lee".to_string(),
            phone: Some("555 0100".to_string()),
            github: Some("  ".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let (surface, _) = record(&doc);

    let contacts: Vec<&str> = surface
        .texts()
        .filter(|op| op.size == Pt(9.0))
        .map(|op| op.text.as_str())
        .collect();
    assert_eq!(contacts, vec!["Phone: 555 0100"]);
    assert!(close(surface.find_text("Phone: 555 0100").expect("phone").x, mm(15.0)));
}

#[test]
fn dates_are_right_aligned_to_the_margin() {
    let doc = ResumeDocument {
        personal_info: person("Jane Doe"),
        experience: vec![Experience {
            company: Some("VeryLongCompanyNameThatIsQuiteLong".to_string()),
            position: Some("Staff Engineer".to_string()),
            start_date: Some("01/2020".to_string()),
            end_date: Some("Present".to_string()),
            responsibilities: strings(&["Led the platform team"]),
            ..Default::default()
        }],
        ..Default::default()
    };
    let (surface, _) = record(&doc);

    let company = surface
        .find_text("VeryLongCompanyNameThatIsQuiteLong")
        .expect("company is placed");
    let date = surface.find_text("01/2020 - Present").expect("dates are placed");

    assert_eq!(company.y, date.y);
    assert!(close(date.x, pagesize::A4.0 - mm(15.0) - date.width));
    assert!(company.x + company.width < date.x);

    let position = surface.find_text("Staff Engineer").expect("position is placed");
    assert!(close(company.y - position.y, mm(5.0)));
}

#[test]
fn lone_dates_are_still_right_aligned() {
    let doc = ResumeDocument {
        personal_info: person("Jane Doe"),
        experience: vec![Experience {
            end_date: Some("Present".to_string()),
            responsibilities: strings(&["Consulting"]),
            ..Default::default()
        }],
        ..Default::default()
    };
    let (surface, _) = record(&doc);

    let date = surface.find_text("Present").expect("date is placed");
    assert!(close(date.x, pagesize::A4.0 - mm(15.0) - date.width));
}

#[test]
fn list_items_hang_under_their_first_line() {
    let doc = ResumeDocument {
        personal_info: person("Jane Doe"),
        experience: vec![Experience {
            position: Some("Engineer".to_string()),
            responsibilities: vec![lipsum::lipsum(80)],
            achievements: strings(&["Cut costs by 30%"]),
            ..Default::default()
        }],
        ..Default::default()
    };
    let (surface, _) = record(&doc);

    let bullet = surface.find_text("\u{2022}").expect("bullet is placed");
    assert!(close(bullet.x, mm(16.0)));
    assert_eq!(bullet.weight, Weight::Bold);

    let lines: Vec<&TextOp> = surface
        .texts()
        .filter(|op| close(op.x, mm(19.0)) && op.text != "Cut costs by 30%")
        .collect();
    assert!(lines.len() > 1);
    assert_eq!(lines[0].y, bullet.y);
    for pair in lines.windows(2) {
        assert!(close(pair[1].y - pair[0].y, mm(4.2)));
    }
    let wrap_width = pagesize::A4.0 - mm(36.0);
    assert!(lines.iter().all(|op| op.width.0 <= wrap_width.0 + 1e-3));

    // the built-in faces have no check mark, so achievements use the fallback marker
    let marker = surface.find_text("\u{bb}").expect("fallback marker is placed");
    assert_eq!(marker.colour, Colour::from((78, 107, 235)));
    assert!(surface.find_text("\u{2713}").is_none());
    let achievement = surface.find_text("Cut costs by 30%").expect("achievement");
    assert_eq!(achievement.y, marker.y);
}

#[test]
fn overflowing_bullets_continue_on_the_next_page() {
    let bullet = vec!["xxxxxxxxx"; 120].join(" ");
    let doc = ResumeDocument {
        personal_info: person("Jane Doe"),
        experience: vec![Experience {
            company: Some("Acme".to_string()),
            position: Some("Engineer".to_string()),
            start_date: Some("2019".to_string()),
            end_date: Some("2023".to_string()),
            responsibilities: vec![bullet.clone(); 6],
            achievements: vec![],
        }],
        education: vec![Education {
            degree: Some("BSc".to_string()),
            field: Some("Physics".to_string()),
            institution: Some("Tech Institute".to_string()),
            graduation_year: Some("2018".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };
    let (surface, summary) = record(&doc);

    assert_eq!(summary.pages, 2);
    assert_eq!(
        summary.sections,
        vec![
            ("PROFESSIONAL EXPERIENCE".to_string(), 0),
            ("EDUCATION".to_string(), 1)
        ]
    );

    // every word of every bullet is placed exactly once
    let words: usize = surface
        .texts()
        .filter(|op| op.text.starts_with("xxxxxxxxx"))
        .map(|op| op.text.split(' ').count())
        .sum();
    assert_eq!(words, 6 * 120);

    let bullet_pages: Vec<usize> = surface
        .texts()
        .filter(|op| op.text == "\u{2022}")
        .map(|op| op.page)
        .collect();
    assert_eq!(bullet_pages, vec![0, 0, 0, 0, 0, 1]);

    let degree = surface.find_text("BSc in Physics").expect("degree is placed");
    assert_eq!(degree.page, 1);
    assert!(surface.find_text("Tech Institute | 2018").is_some());
}

#[test]
fn technical_skills_without_soft_skills() {
    let technical: Vec<String> = (1..=30).map(|i| format!("skill{i:02}")).collect();
    let doc = ResumeDocument {
        personal_info: person("Jane Doe"),
        skills: Some(Skills {
            technical: technical.clone(),
            soft: vec![],
        }),
        ..Default::default()
    };
    let (surface, summary) = record(&doc);

    assert_eq!(summary.sections, vec![("SKILLS".to_string(), 0)]);
    let label = surface.find_text("Technical Skills:").expect("label is placed");
    assert_eq!(label.weight, Weight::Bold);
    assert!(surface.find_text("Soft Skills:").is_none());

    let lines: Vec<&TextOp> = surface
        .texts()
        .filter(|op| op.text.contains("skill"))
        .collect();
    assert!(lines.len() > 1);
    assert!(close(lines[0].y - label.y, mm(5.0)));
    for pair in lines.windows(2) {
        assert!(close(pair[1].y - pair[0].y, mm(10.0 * 0.35 * 1.3)));
    }
    let joined: Vec<&str> = lines.iter().map(|op| op.text.as_str()).collect();
    assert_eq!(joined.join(" "), technical.join(" \u{2022} "));
}

#[test]
fn skill_groups_are_separated() {
    let doc = ResumeDocument {
        personal_info: person("Jane Doe"),
        skills: Some(Skills {
            technical: strings(&["Rust"]),
            soft: strings(&["Mentoring"]),
        }),
        ..Default::default()
    };
    let (surface, _) = record(&doc);

    let rust = surface.find_text("Rust").expect("technical list");
    let soft = surface.find_text("Soft Skills:").expect("soft label");
    // paragraph trailing gap, then the group gap
    let expected = rust.y + mm(10.0 * 0.35 * 1.3 + 1.0 + 3.0);
    assert!(close(soft.y, expected));
}

#[test]
fn certifications_and_projects() {
    let doc = ResumeDocument {
        personal_info: person("Jane Doe"),
        certifications: vec![Certification {
            name: Some("Certified Kubernetes Administrator".to_string()),
            issuer: Some("CNCF".to_string()),
            date: Some("2022".to_string()),
        }],
        projects: vec![
            Project {
                name: Some("resume-pdf".to_string()),
                url: Some("https://example.com/resume-pdf".to_string()),
                description: Some("Lays out resumes.".to_string()),
                technologies: strings(&["Rust", "PDF"]),
            },
            Project {
                name: Some("second".to_string()),
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    let (surface, _) = record(&doc);

    let cert = surface
        .find_text("Certified Kubernetes Administrator")
        .expect("certification");
    let byline = surface.find_text("CNCF | 2022").expect("issuer line");
    assert!(close(byline.y - cert.y, mm(4.0)));
    assert_eq!(byline.size, Pt(9.0));

    let name = surface.find_text("resume-pdf").expect("project name");
    let url = surface
        .find_text("https://example.com/resume-pdf")
        .expect("project url");
    assert_eq!(url.colour, Colour::from((78, 107, 235)));
    assert!(close(url.y - name.y, mm(5.0)));

    let technologies = surface.find_text("Technologies: Rust, PDF").expect("technologies");
    let description = surface.find_text("Lays out resumes.").expect("description");
    assert!(close(technologies.y - description.y, mm(10.0 * 0.35 * 1.4 + 1.0)));

    // trailing gap, then the gap between projects
    let second = surface.find_text("second").expect("second project");
    assert!(close(second.y - technologies.y, mm(5.0 + 1.0 + 2.0)));
}

#[test]
fn rendering_is_idempotent() {
    let doc = full_resume();
    let (first, first_summary) = record(&doc);
    let (second, second_summary) = record(&doc);
    assert_eq!(first.ops, second.ops);
    assert_eq!(first_summary, second_summary);

    let renderer = Renderer::default();
    let a = renderer.render_pdf(&doc).expect("renders");
    let b = renderer.render_pdf(&doc).expect("renders");
    assert_eq!(a, b);
}

#[test]
fn recording_matches_the_pdf_layout() {
    let doc = full_resume();
    let (recording, summary) = record(&doc);

    let renderer = Renderer::default();
    let mut surface = renderer.surface();
    let pdf_summary = renderer.render(&doc, &mut surface);
    assert_eq!(pdf_summary, summary);
    assert_eq!(surface.page_count(), recording.page_count());
}

#[test]
fn pdf_carries_metadata_and_outline() {
    let bytes = render(&full_resume()).expect("renders");
    let text = String::from_utf8_lossy(&bytes);

    assert!(bytes.starts_with(b"%PDF-"));
    assert!(text.contains("(Alex Morgan - Resume)"));
    assert!(text.contains("(Rust, Go, PostgreSQL, Kubernetes)"));
    assert!(text.contains("/Outlines"));
    assert!(text.contains("(PROFESSIONAL EXPERIENCE)"));
    assert!(text.contains("/WinAnsiEncoding"));
    assert!(!text.contains("/CreationDate"));
}

#[test]
fn theme_overrides_change_the_layout() {
    let theme = Theme::from_json(r#"{"paper": "letter", "margin": 25.4}"#).expect("theme");
    let renderer = Renderer::new(theme);
    let doc = ResumeDocument {
        personal_info: person("Jane Doe"),
        ..Default::default()
    };

    let mut surface = RecordingSurface::new(pagesize::LETTER);
    renderer.render(&doc, &mut surface);
    let name = surface.find_text("Jane Doe").expect("name");
    assert!(close(name.x, Pt(72.0)));
    assert!(close(name.y, Pt(72.0)));

    let bytes = renderer.render_pdf(&doc).expect("renders");
    assert!(String::from_utf8_lossy(&bytes).contains("/MediaBox [0 0 612 792]"));
}
