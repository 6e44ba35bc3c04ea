use crate::{
    app::PortfolioApp,
    content::{
        about::{CARD_ICONS, STATS},
        contact::CONTACT_LINKS,
        experience::EXPERIENCE,
        languages::{MAX_RATING, SPOKEN_LANGUAGES},
        nav::NAV_LINKS,
        projects::{LinkKind, PROJECTS, Project},
        services::ServiceCategory,
        skills::SkillCategory,
        ticker::TECH_TICKER,
    },
    foundation::{core::Millis, error::FolioResult},
    i18n::bundle::Translations,
    page::{contact::Field, section::SectionId},
    prefs::{language::Language, theme::Theme},
    render::{
        html::{HtmlWriter, num},
        svg::{Palette, backdrop_svg, scroll_paths_svg},
    },
};

/// Read-only view shared by the section writers.
struct Page<'a> {
    app: &'a PortfolioApp,
    translations: &'a Translations,
    lang: Language,
    now: Millis,
    reduced: bool,
}

impl Page<'_> {
    fn t(&self, key: &str) -> String {
        self.translations.t(self.lang, key)
    }

    /// Inline style of child `index` of `section`'s reveal.
    fn item_style(&self, section: SectionId, index: usize) -> String {
        self.app
            .reveal(section)
            .item(index, self.now, self.reduced)
            .css()
    }

    fn open_section(&self, w: &mut HtmlWriter, section: SectionId) {
        let reveal = self.app.reveal(section);
        let opacity = reveal.container_opacity(self.now, self.reduced);
        let style = if opacity < 1.0 {
            format!("opacity:{}", num(opacity))
        } else {
            String::new()
        };
        w.open(
            "section",
            &[
                ("id", section.as_str()),
                ("class", "section"),
                ("data-revealed", if reveal.is_triggered() { "true" } else { "false" }),
                ("style", &style),
            ],
        );
    }

    fn heading(&self, w: &mut HtmlWriter, section: SectionId, prefix: &str) {
        w.open("header", &[("class", "section-heading"), ("style", &self.item_style(section, 0))])
            .element("h2", &[], &self.t(&format!("{prefix}.title")))
            .element("p", &[], &self.t(&format!("{prefix}.subtitle")))
            .close();
    }
}

/// Render the complete page for the app's current state.
#[tracing::instrument(skip(app), fields(lang = app.language().code()))]
pub fn render_page(app: &PortfolioApp) -> FolioResult<String> {
    let page = Page {
        app,
        translations: app.translations(),
        lang: app.language(),
        now: app.now(),
        reduced: app.prefs().reduced_motion(),
    };
    let markers = app.prefs().markers();

    let mut w = HtmlWriter::new();
    w.raw("<!DOCTYPE html>\n");
    w.open(
        "html",
        &[
            ("lang", markers.lang),
            ("dir", "ltr"),
            ("class", &markers.class_attr()),
            ("data-reduced-motion", if markers.reduced_motion { "true" } else { "false" }),
        ],
    );
    head(&mut w, &page);
    w.open("body", &[]);
    w.element("a", &[("href", "#main"), ("class", "skip-link")], &page.t("accessibility.skipToContent"));
    background_stack(&mut w, &page)?;
    site_header(&mut w, &page);
    w.open("main", &[("id", "main")]);
    hero(&mut w, &page);
    about(&mut w, &page);
    skills(&mut w, &page);
    services(&mut w, &page);
    projects(&mut w, &page);
    experience(&mut w, &page);
    languages(&mut w, &page);
    contact(&mut w, &page);
    w.close();
    footer(&mut w, &page);
    case_study(&mut w, &page);
    w.close().close();

    let html = w.finish()?;
    tracing::debug!(bytes = html.len(), "page rendered");
    Ok(html)
}

fn head(w: &mut HtmlWriter, page: &Page<'_>) {
    let config = page.app.config();
    let origin = config.origin();
    let title = page.t("meta.title");
    let description = page.t("meta.description");
    let canonical = format!("{origin}/");

    w.open("head", &[]);
    w.void("meta", &[("charset", "utf-8")])
        .void("meta", &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")])
        .element("title", &[], &title)
        .void("meta", &[("name", "description"), ("content", &description)])
        .void("meta", &[("name", "keywords"), ("content", &page.t("meta.keywords"))])
        .void("meta", &[("name", "author"), ("content", &config.author)])
        .void("meta", &[("name", "robots"), ("content", "index, follow")])
        .void("link", &[("rel", "canonical"), ("href", &canonical)]);
    for lang in Language::ALL {
        w.void(
            "link",
            &[
                ("rel", "alternate"),
                ("hreflang", lang.code()),
                ("href", &format!("{origin}/{}", lang.code())),
            ],
        );
    }
    w.void(
        "link",
        &[
            ("rel", "alternate"),
            ("hreflang", "x-default"),
            ("href", &format!("{origin}/{}", Language::En.code())),
        ],
    );
    w.void("meta", &[("property", "og:type"), ("content", "website")])
        .void("meta", &[("property", "og:url"), ("content", &canonical)])
        .void("meta", &[("property", "og:title"), ("content", &title)])
        .void("meta", &[("property", "og:description"), ("content", &description)])
        .void("meta", &[("property", "og:locale"), ("content", page.lang.code())]);
    for lang in Language::ALL.into_iter().filter(|&l| l != page.lang) {
        w.void("meta", &[("property", "og:locale:alternate"), ("content", lang.code())]);
    }
    w.close();
}

fn background_stack(w: &mut HtmlWriter, page: &Page<'_>) -> FolioResult<()> {
    let app = page.app;
    let prefs = app.prefs();
    let palette = Palette::for_prefs(prefs.theme(), prefs.high_contrast());
    let layer = app.background_layer();
    let paths = app.scroll_paths();

    w.open("div", &[("class", "background-stack"), ("aria-hidden", "true")]);
    w.empty(
        "div",
        &[
            ("class", "background-base"),
            (
                "style",
                &format!(
                    "background:linear-gradient(180deg,{bg} 0%,{bg} 100%)",
                    bg = palette.background
                ),
            ),
        ],
    );
    w.open("div", &[("class", "scroll-paths")])
        .raw(&scroll_paths_svg(
            &paths.curves(page.reduced),
            &paths.dots(page.now.0, page.reduced),
            palette,
        )?)
        .close();
    w.open(
        "div",
        &[
            ("class", "backdrop"),
            ("data-variant", layer.variant.as_str()),
            ("style", &format!("opacity:{}", num(layer.opacity))),
        ],
    )
    .raw(&backdrop_svg(&app.backdrop_shapes(), app.layout().viewport(), palette)?)
    .close();

    let spot = app.spotlight_frame();
    w.empty(
        "div",
        &[
            ("class", "spotlight"),
            ("data-pinned", if spot.pinned { "true" } else { "false" }),
            (
                "style",
                &format!(
                    "opacity:{};background:radial-gradient(800px circle at {}% {}%,{},transparent 70%)",
                    num(spot.opacity),
                    num(spot.position.x),
                    num(spot.position.y),
                    palette.primary
                ),
            ),
        ],
    );

    let overlay = app.overlay();
    w.open("div", &[("class", "readability-overlay")]);
    w.empty(
        "div",
        &[
            ("class", "scrim"),
            (
                "style",
                &format!("background:{};opacity:{}", palette.background, num(overlay.scrim_opacity)),
            ),
        ],
    );
    for edge in ["top", "bottom"] {
        w.empty(
            "div",
            &[
                ("class", &format!("edge edge-{edge}")),
                ("style", &format!("opacity:{}", num(overlay.edge_opacity()))),
            ],
        );
    }
    if let Some(blur) = overlay.blur_opacity {
        w.empty(
            "div",
            &[
                ("class", "blur"),
                ("style", &format!("backdrop-filter:blur(2px);opacity:{}", num(blur))),
            ],
        );
    }
    w.close().close();
    Ok(())
}

fn toggle(w: &mut HtmlWriter, class: &str, label: &str, pressed: bool) {
    w.element(
        "button",
        &[
            ("type", "button"),
            ("class", class),
            ("aria-label", label),
            ("aria-pressed", if pressed { "true" } else { "false" }),
        ],
        label,
    );
}

fn site_header(w: &mut HtmlWriter, page: &Page<'_>) {
    let app = page.app;
    let header = app.header();
    let prefs = app.prefs();
    let active = app.active_section();

    w.open("header", &[("class", "site-header")]);
    w.element("a", &[("href", "#hero"), ("class", "brand")], &app.config().author);

    let nav_class = if header.is_mobile_menu_open() { "nav open" } else { "nav" };
    w.open("nav", &[("class", nav_class), ("aria-label", "primary")]).open("ul", &[]);
    for &section in NAV_LINKS {
        let href = format!("#{}", section.as_str());
        let current = if section == active { "true" } else { "false" };
        w.open("li", &[])
            .element("a", &[("href", &href), ("data-active", current)], &page.t(section.nav_key()))
            .close();
    }
    w.close().close();

    w.open("div", &[("class", "controls")]);
    toggle(w, "toggle-theme", &page.t("accessibility.theme"), prefs.theme() == Theme::Dark);
    toggle(w, "toggle-contrast", &page.t("accessibility.highContrast"), prefs.high_contrast());
    toggle(w, "toggle-motion", &page.t("accessibility.reducedMotion"), prefs.reduced_motion());

    let menu_open = header.is_language_menu_open();
    w.open("div", &[("class", "language-switcher")]);
    w.element(
        "button",
        &[
            ("type", "button"),
            ("aria-label", &page.t("accessibility.languageSwitch")),
            ("aria-expanded", if menu_open { "true" } else { "false" }),
        ],
        &format!("{} {}", page.lang.flag(), page.lang.code().to_uppercase()),
    );
    let list_attrs: &[(&str, &str)] = if menu_open {
        &[("role", "menu")]
    } else {
        &[("role", "menu"), ("hidden", "hidden")]
    };
    w.open("ul", list_attrs);
    for lang in Language::ALL {
        let selected = if lang == page.lang { "true" } else { "false" };
        w.open("li", &[("role", "menuitem"), ("lang", lang.code()), ("aria-current", selected)])
            .text(&format!("{} {}", lang.flag(), lang.native_name()))
            .close();
    }
    w.close().close();

    let menu_key = if header.is_mobile_menu_open() {
        "accessibility.closeMenu"
    } else {
        "accessibility.openMenu"
    };
    w.element(
        "button",
        &[
            ("type", "button"),
            ("class", "menu-toggle"),
            ("aria-expanded", if header.is_mobile_menu_open() { "true" } else { "false" }),
        ],
        &page.t(menu_key),
    );
    w.close().close();
}

fn hero(w: &mut HtmlWriter, page: &Page<'_>) {
    let id = SectionId::Hero;
    let offset = page.app.hero().offset(page.reduced);
    page.open_section(w, id);
    w.open(
        "div",
        &[
            ("class", "hero-content"),
            (
                "style",
                &format!("transform:translate({}px,{}px)", num(offset.x), num(offset.y)),
            ),
        ],
    );
    w.element("p", &[("class", "available"), ("style", &page.item_style(id, 0))], &page.t("hero.available"));
    w.open("h1", &[("style", &page.item_style(id, 1))])
        .element("span", &[("class", "greeting")], &page.t("hero.greeting"))
        .text(" ")
        .element("span", &[("class", "name")], &page.t("hero.name"))
        .close();
    w.element("p", &[("class", "title"), ("style", &page.item_style(id, 2))], &page.t("hero.title"));
    w.element("p", &[("class", "subtitle"), ("style", &page.item_style(id, 3))], &page.t("hero.subtitle"));
    w.open("div", &[("class", "cta"), ("style", &page.item_style(id, 4))])
        .element("a", &[("href", "#projects"), ("class", "button primary")], &page.t("hero.ctaProjects"))
        .element("a", &[("href", "#contact"), ("class", "button")], &page.t("hero.ctaContact"))
        .close();
    w.close();

    w.open("ul", &[("class", "tech-ticker"), ("aria-hidden", "true")]);
    for item in TECH_TICKER {
        w.element(
            "li",
            &[("data-icon", item.icon), ("style", &format!("color:{}", item.color))],
            item.name,
        );
    }
    w.close();
    w.element("a", &[("href", "#about"), ("class", "scroll-hint")], &page.t("hero.scroll"));
    w.close();
}

fn about(w: &mut HtmlWriter, page: &Page<'_>) {
    let id = SectionId::About;
    page.open_section(w, id);
    w.element("h2", &[("style", &page.item_style(id, 0))], &page.t("about.title"));
    w.element("p", &[("style", &page.item_style(id, 1))], &page.t("about.desc"));

    w.open("div", &[("class", "cards")]);
    let cards = page.translations.list(page.lang, "about.cards");
    for (i, card) in cards.iter().enumerate() {
        let icon = CARD_ICONS.get(i).copied().unwrap_or("code");
        w.open("article", &[("class", "card"), ("data-icon", icon), ("style", &page.item_style(id, i + 2))])
            .element("h3", &[], card.get("title").map_or("", String::as_str))
            .element("p", &[], card.get("desc").map_or("", String::as_str))
            .close();
    }
    w.close();

    w.open("dl", &[("class", "stats")]);
    for (i, stat) in STATS.iter().enumerate() {
        w.open("div", &[("class", "stat"), ("style", &page.item_style(id, cards.len() + 2 + i))])
            .element("dt", &[], &page.t(&format!("about.stats.{}", stat.label_key)))
            .element("dd", &[], &format!("{}{}", stat.value, stat.suffix))
            .close();
    }
    w.close().close();
}

fn skills(w: &mut HtmlWriter, page: &Page<'_>) {
    let id = SectionId::Skills;
    let lab = page.app.skills();
    let tabs = lab.tabs();
    page.open_section(w, id);
    page.heading(w, id, "skills");

    w.open("div", &[("role", "tablist"), ("class", "tabs"), ("style", &page.item_style(id, 1))]);
    for category in SkillCategory::ALL {
        let active = category == tabs.active_category();
        w.element(
            "button",
            &[
                ("type", "button"),
                ("role", "tab"),
                ("data-category", category.key()),
                ("aria-selected", if active { "true" } else { "false" }),
            ],
            &page.t(&format!("skills.categories.{}", category.key())),
        );
    }
    w.close();

    let selected = tabs.selected().map(|s| s.id);
    w.open("ul", &[("class", "skill-list"), ("style", &page.item_style(id, 2))]);
    for skill in tabs.visible() {
        w.open(
            "li",
            &[
                ("data-skill", skill.id),
                ("data-icon", skill.icon),
                ("aria-current", if Some(skill.id) == selected { "true" } else { "false" }),
                ("style", &format!("--skill-color:{}", skill.color)),
            ],
        )
        .element("span", &[], &page.t(&format!("skills.items.{}.name", skill.label_key)))
        .close();
    }
    w.close();

    w.open("div", &[("class", "demo-panel"), ("style", &page.item_style(id, 3))]);
    match lab.player() {
        Some(player) => {
            let skill = player.skill();
            let renderer = player.renderer();
            w.open("div", &[("class", "demo"), ("data-renderer", renderer.as_str())]);
            w.element("h3", &[], &page.t(&format!("skills.items.{}.name", skill.label_key)));
            w.element("p", &[("class", "desc")], &page.t(&format!("skills.items.{}.desc", skill.label_key)));
            w.element("h4", &[], renderer.heading());
            w.open("ol", &[("class", "stages")]);
            for (i, stage) in renderer.stages().iter().enumerate() {
                let current = if i == player.stage() { "step" } else { "false" };
                w.element("li", &[("aria-current", current)], stage);
            }
            w.close();
            w.element("p", &[("class", "caption")], &page.t(&renderer.caption_key()));
            let (label_key, state) = if lab.is_playing() {
                ("skills.pause", "playing")
            } else {
                ("skills.play", "paused")
            };
            w.element(
                "button",
                &[("type", "button"), ("class", "play-toggle"), ("data-state", state)],
                &page.t(label_key),
            );
            w.close();
        }
        None => {
            w.element("p", &[("class", "placeholder")], &page.t("skills.selectSkill"));
        }
    }
    w.close().close();
}

fn services(w: &mut HtmlWriter, page: &Page<'_>) {
    let id = SectionId::Services;
    let tabs = page.app.services();
    page.open_section(w, id);
    page.heading(w, id, "services");

    w.open("div", &[("role", "tablist"), ("class", "tabs"), ("style", &page.item_style(id, 1))]);
    for category in ServiceCategory::ALL {
        let active = category == tabs.active_category();
        w.element(
            "button",
            &[
                ("type", "button"),
                ("role", "tab"),
                ("data-category", category.key()),
                ("aria-selected", if active { "true" } else { "false" }),
            ],
            &page.t(&format!("services.categories.{}", category.key())),
        );
    }
    w.close();

    let selected = tabs.selected().map(|s| s.id);
    w.open("ul", &[("class", "service-list"), ("style", &page.item_style(id, 2))]);
    for service in tabs.visible() {
        w.open(
            "li",
            &[
                ("data-service", service.id),
                ("data-icon", service.icon),
                ("aria-current", if Some(service.id) == selected { "true" } else { "false" }),
                ("style", &format!("--service-color:{}", service.color)),
            ],
        )
        .element("h3", &[], &page.t(&format!("services.items.{}.name", service.label_key)))
        .element("p", &[], &page.t(&format!("services.items.{}.desc", service.label_key)))
        .close();
    }
    w.close();
    w.element(
        "a",
        &[("href", "#contact"), ("class", "button primary"), ("style", &page.item_style(id, 3))],
        &page.t("services.cta"),
    );
    w.close();
}

fn link_label_key(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Live => "projects.viewLive",
        LinkKind::Github => "projects.viewCode",
        LinkKind::CaseStudy => "projects.viewCaseStudy",
    }
}

fn project_links(w: &mut HtmlWriter, page: &Page<'_>, project: &Project) {
    w.open("div", &[("class", "links")]);
    for link in project.links {
        w.element(
            "a",
            &[
                ("href", link.url),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
                ("data-kind", kind_str(link.kind)),
            ],
            &page.t(link_label_key(link.kind)),
        );
    }
    w.close();
}

fn kind_str(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Live => "live",
        LinkKind::Github => "github",
        LinkKind::CaseStudy => "case-study",
    }
}

fn projects(w: &mut HtmlWriter, page: &Page<'_>) {
    let id = SectionId::Projects;
    page.open_section(w, id);
    page.heading(w, id, "projects");

    w.open("div", &[("class", "project-grid")]);
    for (i, project) in PROJECTS.iter().enumerate() {
        w.open(
            "article",
            &[
                ("class", "project"),
                ("data-project", project.id),
                ("style", &page.item_style(id, i + 1)),
            ],
        );
        w.element("h3", &[], &page.t(&project.item_key("title")))
            .element("p", &[("class", "year")], &project.year.to_string())
            .element("p", &[], &page.t(&project.item_key("desc")));
        w.open("ul", &[("class", "stack"), ("aria-label", &page.t("projects.stack"))]);
        for tech in project.stack {
            w.element("li", &[], tech);
        }
        w.close();
        project_links(w, page, project);
        w.element(
            "button",
            &[("type", "button"), ("class", "open-case-study"), ("data-project", project.id)],
            &page.t("projects.viewCaseStudy"),
        );
        w.close();
    }
    w.close().close();
}

/// Case-study dialog for the selected project, if one is showing.
fn case_study(w: &mut HtmlWriter, page: &Page<'_>) {
    let panel = page.app.projects();
    let Some(project) = panel.selected() else {
        return;
    };
    let frame = panel.modal().frame(page.now);
    w.open(
        "div",
        &[
            ("class", "modal-backdrop"),
            ("style", &format!("opacity:{}", num(frame.backdrop_opacity))),
        ],
    );
    w.open(
        "div",
        &[
            ("role", "dialog"),
            ("aria-modal", "true"),
            ("class", "case-study"),
            ("data-project", project.id),
            (
                "style",
                &format!(
                    "opacity:{};transform:translateY({}px) scale({})",
                    num(frame.opacity),
                    num(frame.offset_y),
                    num(frame.scale)
                ),
            ),
        ],
    );
    w.element(
        "button",
        &[("type", "button"), ("class", "close"), ("aria-label", &page.t("projects.close"))],
        "×",
    );
    w.element("h2", &[], &page.t(&project.item_key("title")));
    w.element("p", &[("class", "role")], &page.t(&project.item_key("role")));
    for part in ["problem", "solution", "result"] {
        w.open("section", &[("class", part)])
            .element("h3", &[], &page.t(&format!("projects.{part}")))
            .element("p", &[], &page.t(&project.item_key(part)))
            .close();
    }

    w.open("section", &[("class", "owned")])
        .element("h3", &[], &page.t("projects.owned"))
        .open("ul", &[]);
    for key in project.case_study.owned_keys {
        w.element("li", &[], &page.t(&project.item_key(key)));
    }
    w.close().close();

    w.open("section", &[("class", "screenshots")])
        .element("h3", &[], &page.t("projects.screenshots"));
    for (i, src) in project.case_study.screenshots.iter().enumerate() {
        let alt = page
            .translations
            .t_with(page.lang, "projects.screenshot", &[("n", &(i + 1).to_string())]);
        w.void("img", &[("src", *src), ("alt", &alt), ("loading", "lazy")]);
    }
    w.close();
    project_links(w, page, project);
    w.close().close();
}

fn experience(w: &mut HtmlWriter, page: &Page<'_>) {
    let id = SectionId::Experience;
    page.open_section(w, id);
    page.heading(w, id, "experience");
    w.open("ol", &[("class", "timeline")]);
    for (i, item) in EXPERIENCE.iter().enumerate() {
        w.open("li", &[("data-experience", item.id), ("style", &page.item_style(id, i + 1))])
            .element("h3", &[], &page.t(&format!("experience.roles.{}", item.role_key)))
            .element("p", &[("class", "company")], &page.t(&format!("experience.companies.{}", item.company_key)))
            .element("p", &[("class", "period")], &page.t(&format!("experience.periods.{}", item.period_key)))
            .open("ul", &[]);
        for bullet in item.bullet_keys {
            w.element("li", &[], &page.t(&format!("experience.bullets.{bullet}")));
        }
        w.close().close();
    }
    w.close().close();
}

fn languages(w: &mut HtmlWriter, page: &Page<'_>) {
    let id = SectionId::Languages;
    page.open_section(w, id);
    page.heading(w, id, "languages");
    w.open("ul", &[("class", "spoken-languages")]);
    for (i, lang) in SPOKEN_LANGUAGES.iter().enumerate() {
        let rating = format!("{}/{MAX_RATING}", lang.rating);
        w.open("li", &[("data-language", lang.id), ("style", &page.item_style(id, i + 1))])
            .element("h3", &[], &page.t(&format!("languages.items.{}.name", lang.name_key)))
            .open("span", &[("class", "rating"), ("aria-label", &rating)]);
        for dot in 1..=MAX_RATING {
            let filled = if dot <= lang.rating { "dot filled" } else { "dot" };
            w.empty("span", &[("class", filled)]);
        }
        w.close()
            .element("p", &[], &page.t(&format!("languages.items.{}.note", lang.note_key)))
            .close();
    }
    w.close().close();
}

fn contact(w: &mut HtmlWriter, page: &Page<'_>) {
    let id = SectionId::Contact;
    let form = page.app.contact();
    page.open_section(w, id);
    page.heading(w, id, "contact");

    w.open("form", &[("class", "contact-form"), ("novalidate", "novalidate"), ("style", &page.item_style(id, 1))]);
    for field in Field::ALL {
        let name = field.as_str();
        let error = form.errors().get(field);
        let error_id = format!("{name}-error");
        w.open("label", &[("for", name)]).text(&page.t(&format!("contact.form.{name}"))).close();

        let value = form.draft().get(field);
        let invalid = if error.is_some() { "true" } else { "false" };
        let mut attrs = vec![("id", name), ("name", name), ("aria-invalid", invalid)];
        if error.is_some() {
            attrs.push(("aria-describedby", error_id.as_str()));
        }
        match field {
            Field::Message => {
                attrs.push(("rows", "5"));
                w.element("textarea", &attrs, value);
            }
            Field::Email => {
                attrs.extend([("type", "email"), ("value", value)]);
                w.void("input", &attrs);
            }
            Field::Name => {
                attrs.extend([("type", "text"), ("value", value)]);
                w.void("input", &attrs);
            }
        }
        if let Some(key) = error {
            w.element("p", &[("id", &error_id), ("class", "field-error"), ("role", "alert")], &page.t(key));
        }
    }

    let status = form.status();
    let mut button = vec![("type", "submit"), ("data-status", status.as_str())];
    if form.is_submit_disabled() {
        button.push(("disabled", "disabled"));
    }
    w.element("button", &button, &page.t(status.label_key()));
    w.close();

    w.open("div", &[("class", "contact-links"), ("style", &page.item_style(id, 2))])
        .element("p", &[], &page.t("contact.orConnect"))
        .open("ul", &[]);
    for link in CONTACT_LINKS {
        let mut attrs = vec![("href", link.url), ("data-icon", link.icon)];
        if link.opens_new_tab() {
            attrs.extend([("target", "_blank"), ("rel", "noopener noreferrer")]);
        }
        w.open("li", &[])
            .element("a", &attrs, &page.t(&format!("contact.links.{}", link.label_key)))
            .close();
    }
    w.close().close().close();
}

fn footer(w: &mut HtmlWriter, page: &Page<'_>) {
    let config = page.app.config();
    let copyright = page.translations.t_with(
        page.lang,
        "footer.copyright",
        &[("year", &config.year.to_string()), ("author", &config.author)],
    );
    w.open("footer", &[("class", "site-footer")])
        .element("span", &[("class", "copyright")], &copyright)
        .element("span", &[("class", "rights")], &format!("• {}", page.t("footer.rights")))
        .element("a", &[("href", "#hero"), ("class", "back-to-top")], &page.t("footer.backToTop"))
        .close();
}

#[cfg(test)]
#[path = "../../tests/unit/render/document.rs"]
mod tests;
