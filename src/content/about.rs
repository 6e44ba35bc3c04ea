#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Stat {
    pub id: &'static str,
    pub value: u32,
    pub suffix: &'static str,
    /// Under `about.stats.`.
    pub label_key: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat {
        id: "years",
        value: 8,
        suffix: "+",
        label_key: "years",
    },
    Stat {
        id: "projects",
        value: 50,
        suffix: "+",
        label_key: "projects",
    },
    Stat {
        id: "clients",
        value: 30,
        suffix: "+",
        label_key: "clients",
    },
];

/// Icon per about card, in card order.
pub static CARD_ICONS: &[&str] = &["code", "zap", "rocket"];
