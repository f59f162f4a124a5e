use axum::response::IntoResponse;
use project_records_inquiry::{InquiryForm, InvalidFields};

use crate::navigation::{MenuState, NavLink, Section};
use crate::template::{Layout, Template};

pub const WORK_PLACEHOLDERS: [u8; 3] = [1, 2, 3];

/// An entry of the project type `<select>`
pub struct ProjectOption {
    pub value: String,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub layout: Layout<'a>,
    pub menu: MenuState,
    pub nav: &'static [Section],
    pub panel_links: Vec<NavLink>,
    pub book_href: String,
    pub work: &'static [u8],
    pub form: InquiryForm,
    pub invalid: InvalidFields,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(layout: Layout<'a>, menu: MenuState) -> Self {
        Self {
            layout,
            menu,
            nav: &Section::NAV,
            panel_links: menu.panel_links(),
            book_href: menu.close_href(&Section::Contact),
            work: &WORK_PLACEHOLDERS,
            form: InquiryForm::default(),
            invalid: InvalidFields::default(),
        }
    }

    /// Configured project types with the submitted one marked as selected.
    /// Empty when the field is free text.
    pub fn project_options(&self) -> Vec<ProjectOption> {
        self.layout
            .site
            .project_types
            .iter()
            .map(|value| ProjectOption {
                value: value.to_owned(),
                selected: *value == self.form.project_type,
            })
            .collect()
    }
}

pub async fn page(template: Template, menu: MenuState) -> impl IntoResponse {
    template.render(IndexTemplate::new(template.layout(), menu))
}
