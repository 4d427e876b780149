use super::{LayoutCursor, RenderSummary};
use crate::colour::Colour;
use crate::layout::{pack_rows, Margins};
use crate::resume::{present, present_items, PersonalInfo, ResumeDocument};
use crate::surface::{Surface, Weight};
use crate::theme::{ParagraphStyle, TextStyle, Theme};
use crate::units::{Mm, Pt};
use tracing::{debug, warn};

fn pt(length: Mm) -> Pt {
    length.into()
}

/// A single pass of laying a resume onto a surface. Holds the cursor, so a session is
/// created fresh for every document.
pub(crate) struct RenderSession<'a, S: Surface> {
    theme: &'a Theme,
    surface: &'a mut S,
    cursor: LayoutCursor,
    margins: Margins,
    page_width: Pt,
    page_height: Pt,
    content_width: Pt,
    sections: Vec<(String, usize)>,
    warned_fallback: bool,
}

impl<'a, S: Surface> RenderSession<'a, S> {
    pub(crate) fn new(theme: &'a Theme, surface: &'a mut S) -> RenderSession<'a, S> {
        let (page_width, page_height) = surface.page_size();
        let margins = Margins::all(theme.margin);
        let page = surface.page_count().saturating_sub(1);
        RenderSession {
            theme,
            surface,
            cursor: LayoutCursor::new(page, margins.top),
            margins,
            page_width,
            page_height,
            content_width: margins.content_width(page_width),
            sections: Vec::new(),
            warned_fallback: false,
        }
    }

    pub(crate) fn run(mut self, doc: &ResumeDocument) -> RenderSummary {
        self.heading(&doc.personal_info);
        self.summary(doc);
        self.experience(doc);
        self.education(doc);
        self.skills(doc);
        self.certifications(doc);
        self.projects(doc);

        RenderSummary {
            pages: self.surface.page_count(),
            sections: self.sections,
        }
    }

    /// Start a new page if a block of `height` would run past the bottom margin
    fn check_page_break(&mut self, height: Pt) -> bool {
        let bottom = self.margins.content_bottom(self.page_height);
        if self.cursor.fits(height, bottom) {
            return false;
        }

        debug!(
            page = self.cursor.page,
            y = *self.cursor.y,
            height = *height,
            "breaking to a new page"
        );
        self.surface.add_page();
        self.cursor.next_page(self.margins.top);
        true
    }

    fn apply(&mut self, style: &TextStyle) {
        self.surface.set_font_size(style.size);
        self.surface.set_weight(style.weight);
        self.surface.set_text_colour(style.colour);
    }

    fn place(&mut self, text: &str, x: Pt) {
        self.surface.text(text, (x, self.cursor.y));
    }

    fn heading(&mut self, info: &PersonalInfo) {
        let theme = self.theme;
        let heading = &theme.heading;

        if !info.name.trim().is_empty() {
            self.apply(&heading.name);
            self.place(info.name.trim(), self.margins.left);
            self.cursor.advance(heading.name_advance);
        }

        let items: Vec<String> = [
            (None, &info.email),
            (Some("Phone"), &info.phone),
            (Some("Location"), &info.location),
            (Some("LinkedIn"), &info.linkedin),
            (Some("GitHub"), &info.github),
            (Some("Portfolio"), &info.portfolio),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            let value = present(value)?;
            Some(match label {
                Some(label) => format!("{label}: {value}"),
                None => value.to_string(),
            })
        })
        .collect();

        self.apply(&heading.contact);
        let widths: Vec<Pt> = items
            .iter()
            .map(|item| self.surface.text_width(item))
            .collect();
        for row in pack_rows(&widths, pt(heading.contact_packing_gap), self.content_width) {
            let mut x = self.margins.left;
            for i in row {
                self.place(&items[i], x);
                x += widths[i] + pt(heading.contact_gap);
            }
            self.cursor.advance(heading.contact_row_advance);
        }
        self.cursor.advance(heading.contact_block_gap);
    }

    /// A bold title with an accent rule under it, as long as the title is wide
    fn section_header(&mut self, title: &str) {
        let theme = self.theme;
        let header = &theme.header;

        self.check_page_break(pt(header.check));
        self.apply(&header.text);
        self.place(title, self.margins.left);

        let width = self.surface.text_width(title);
        let rule_y = self.cursor.y + pt(header.rule_offset);
        self.surface.set_line_width(pt(header.rule_width));
        self.surface.set_draw_colour(theme.accent);
        let left = self.margins.left;
        self.surface.line((left, rule_y), (left + width, rule_y));

        self.surface.bookmark(title, self.cursor.y);
        self.sections.push((title.to_string(), self.cursor.page));
        self.cursor.advance(header.advance);
    }

    fn paragraph(&mut self, text: &str, style: &ParagraphStyle) {
        let theme = self.theme;
        self.apply(&style.text);

        let spacing = pt(theme.line_spacing(style));
        let lines = self.surface.split_text_to_size(text, self.content_width);
        let last = lines.len().saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            self.check_page_break(spacing + pt(theme.paragraph_check_extra));
            self.place(line, self.margins.left);
            if i < last {
                self.cursor.advance(spacing);
            }
        }
        self.cursor.advance(spacing + pt(theme.paragraph_trailing_gap));
    }

    /// A marker at a small indent followed by text whose wrapped lines all align under
    /// the first line's text
    fn list_item(&mut self, text: &str, marker: &str, marker_colour: Colour) {
        let theme = self.theme;
        let list = &theme.list;

        self.check_page_break(pt(list.check));
        self.surface.set_font_size(list.text.size);
        self.surface.set_text_colour(marker_colour);
        self.surface.set_weight(Weight::Bold);
        let marker = if self.surface.can_render(marker) {
            marker
        } else {
            if !self.warned_fallback {
                warn!(marker, fallback = %list.fallback, "font cannot show marker, using fallback");
                self.warned_fallback = true;
            }
            list.fallback.as_str()
        };
        self.place(marker, self.margins.left + pt(list.marker_indent));

        self.apply(&list.text);
        let lines = self
            .surface
            .split_text_to_size(text, self.content_width - pt(list.wrap_inset));
        let x = self.margins.left + pt(list.text_indent);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.cursor.advance(list.line_advance);
                self.check_page_break(pt(list.line_advance));
            }
            self.place(line, x);
        }
        self.cursor.advance(list.item_gap);
    }

    /// A label at the left margin and a value right-aligned to the right margin, on the
    /// same baseline
    fn two_column(&mut self, label: Option<&str>, value: Option<&str>) {
        let right = self.margins.content_right(self.page_width);
        let value_x = value.map(|value| right - self.surface.text_width(value));

        if let (Some(label), Some(value_x)) = (label, value_x) {
            let label_end = self.margins.left + self.surface.text_width(label);
            if label_end > value_x {
                warn!(
                    label,
                    value,
                    overlap = *(label_end - value_x),
                    "two-column row overlaps"
                );
            }
        }

        if let Some(label) = label {
            self.place(label, self.margins.left);
        }
        if let (Some(value), Some(x)) = (value, value_x) {
            self.place(value, x);
        }
    }

    fn summary(&mut self, doc: &ResumeDocument) {
        let Some(summary) = present(&doc.summary) else {
            debug!("no summary, omitting section");
            return;
        };
        let theme = self.theme;
        self.section_header("PROFESSIONAL SUMMARY");
        self.paragraph(summary, &theme.summary);
    }

    fn experience(&mut self, doc: &ResumeDocument) {
        let theme = self.theme;
        let entry = &theme.entry;
        let list = &theme.list;

        let entries: Vec<_> = doc.experience.iter().filter(|e| !e.is_blank()).collect();
        if entries.is_empty() {
            debug!("no experience, omitting section");
            return;
        }
        self.section_header("PROFESSIONAL EXPERIENCE");

        for (i, exp) in entries.into_iter().enumerate() {
            self.check_page_break(pt(entry.experience_check));
            if i > 0 {
                self.cursor.advance(entry.experience_gap);
            }

            if let Some(position) = present(&exp.position) {
                self.apply(&entry.title);
                self.place(position, self.margins.left);
                self.cursor.advance(entry.title_advance);
            }

            let company = present(&exp.company);
            let dates = exp.date_range();
            if company.is_some() || dates.is_some() {
                self.apply(&entry.meta);
                self.two_column(company, dates.as_deref());
                self.cursor.advance(entry.meta_advance);
            }

            for responsibility in present_items(&exp.responsibilities) {
                self.list_item(responsibility, &list.bullet, list.text.colour);
            }
            for achievement in present_items(&exp.achievements) {
                self.list_item(achievement, &list.achievement, theme.accent);
            }

            self.cursor.advance(entry.experience_trailing_gap);
        }
    }

    fn education(&mut self, doc: &ResumeDocument) {
        let theme = self.theme;
        let entry = &theme.entry;

        let entries: Vec<_> = doc.education.iter().filter(|e| !e.is_blank()).collect();
        if entries.is_empty() {
            debug!("no education, omitting section");
            return;
        }
        self.section_header("EDUCATION");

        for edu in entries {
            self.check_page_break(pt(entry.education_check));
            if let Some(title) = edu.title() {
                self.apply(&entry.title);
                self.place(&title, self.margins.left);
                self.cursor.advance(entry.title_advance);
            }
            if let Some(details) = edu.details() {
                self.apply(&entry.meta);
                self.place(&details, self.margins.left);
            }
            self.cursor.advance(entry.education_advance);
        }
    }

    fn skills(&mut self, doc: &ResumeDocument) {
        let Some(skills) = doc.skills.as_ref().filter(|s| !s.is_blank()) else {
            debug!("no skills, omitting section");
            return;
        };
        let theme = self.theme;
        let style = &theme.skills;
        self.section_header("SKILLS");

        let groups = [
            ("Technical Skills:", present_items(&skills.technical)),
            ("Soft Skills:", present_items(&skills.soft)),
        ];
        let groups = groups.iter().filter(|(_, items)| !items.is_empty());
        for (i, (label, items)) in groups.enumerate() {
            if i > 0 {
                self.cursor.advance(style.group_gap);
            }

            // keep the label with the first line of its list
            let first_line = pt(theme.line_spacing(&style.list) + theme.paragraph_check_extra);
            self.check_page_break(pt(style.label_advance) + first_line);
            self.apply(&style.label);
            self.place(label, self.margins.left);
            self.cursor.advance(style.label_advance);

            self.paragraph(&items.join(style.separator.as_str()), &style.list);
        }
    }

    fn certifications(&mut self, doc: &ResumeDocument) {
        let theme = self.theme;
        let style = &theme.certification;

        let entries: Vec<_> = doc.certifications.iter().filter(|c| !c.is_blank()).collect();
        if entries.is_empty() {
            debug!("no certifications, omitting section");
            return;
        }
        self.section_header("CERTIFICATIONS");

        for cert in entries {
            self.check_page_break(pt(style.check));
            if let Some(name) = present(&cert.name) {
                self.apply(&style.name);
                self.place(name, self.margins.left);
            }
            if let Some(byline) = cert.byline() {
                self.apply(&style.byline);
                let y = self.cursor.y + pt(style.byline_offset);
                self.surface.text(&byline, (self.margins.left, y));
            }
            self.cursor.advance(style.advance);
        }
    }

    fn projects(&mut self, doc: &ResumeDocument) {
        let theme = self.theme;
        let entry = &theme.entry;

        let entries: Vec<_> = doc.projects.iter().filter(|p| !p.is_blank()).collect();
        if entries.is_empty() {
            debug!("no projects, omitting section");
            return;
        }
        self.section_header("PROJECTS");

        for (i, project) in entries.into_iter().enumerate() {
            self.check_page_break(pt(entry.project_check));
            if i > 0 {
                self.cursor.advance(entry.project_gap);
            }

            if let Some(name) = present(&project.name) {
                self.apply(&entry.title);
                self.place(name, self.margins.left);
                self.cursor.advance(entry.title_advance);
            }
            if let Some(url) = present(&project.url) {
                self.apply(&entry.url);
                self.place(url, self.margins.left);
                self.cursor.advance(entry.url_advance);
            }
            if let Some(description) = present(&project.description) {
                self.paragraph(description, &entry.description);
            }

            let technologies = present_items(&project.technologies);
            if !technologies.is_empty() {
                self.apply(&entry.technologies);
                let text = format!("Technologies: {}", technologies.join(", "));
                for line in self.surface.split_text_to_size(&text, self.content_width) {
                    self.check_page_break(pt(entry.technologies_check));
                    self.place(&line, self.margins.left);
                    self.cursor.advance(entry.technologies_advance);
                }
            }

            self.cursor.advance(entry.project_trailing_gap);
        }
    }
}
