use crate::page::section::SectionId;

/// Header navigation, in display order. Labels are under `nav.`.
pub static NAV_LINKS: &[SectionId] = &[
    SectionId::About,
    SectionId::Skills,
    SectionId::Services,
    SectionId::Projects,
    SectionId::Experience,
    SectionId::Languages,
    SectionId::Contact,
];
