#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContactLink {
    pub id: &'static str,
    /// Under `contact.links.`.
    pub label_key: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

impl ContactLink {
    /// `mailto:` links open in place; everything else opens a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.url.starts_with("mailto:")
    }
}

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        id: "email",
        label_key: "email",
        url: "mailto:hello@example.com",
        icon: "mail",
    },
    ContactLink {
        id: "linkedin",
        label_key: "linkedin",
        url: "https://linkedin.com/in/username",
        icon: "linkedin",
    },
    ContactLink {
        id: "github",
        label_key: "github",
        url: "https://github.com/username",
        icon: "github",
    },
    ContactLink {
        id: "telegram",
        label_key: "telegram",
        url: "https://t.me/username",
        icon: "send",
    },
];
