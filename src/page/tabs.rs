use crate::{
    content::{
        services::{SERVICES, Service, ServiceCategory},
        skills::{SKILLS, Skill, SkillCategory},
    },
    foundation::error::{FolioError, FolioResult},
};

/// A static table entry that belongs to one category.
pub trait Categorized: 'static {
    type Category: Copy + Eq + std::fmt::Debug;

    fn id(&self) -> &'static str;
    fn category(&self) -> Self::Category;
}

impl Categorized for Skill {
    type Category = SkillCategory;

    fn id(&self) -> &'static str {
        self.id
    }

    fn category(&self) -> SkillCategory {
        self.category
    }
}

impl Categorized for Service {
    type Category = ServiceCategory;

    fn id(&self) -> &'static str {
        self.id
    }

    fn category(&self) -> ServiceCategory {
        self.category
    }
}

/// Category switcher with a selected item, local to one panel.
#[derive(Debug)]
pub struct CategoryTabs<T: Categorized> {
    items: &'static [T],
    active: T::Category,
    selected: Option<&'static T>,
}

impl<T: Categorized> CategoryTabs<T> {
    /// Starts on `category` with its first item selected.
    pub fn new(items: &'static [T], category: T::Category) -> Self {
        let selected = items.iter().find(|i| i.category() == category);
        Self {
            items,
            active: category,
            selected,
        }
    }

    pub fn active_category(&self) -> T::Category {
        self.active
    }

    pub fn selected(&self) -> Option<&'static T> {
        self.selected
    }

    pub fn visible(&self) -> impl Iterator<Item = &'static T> + '_ {
        let active = self.active;
        self.items.iter().filter(move |i| i.category() == active)
    }

    /// Switch category and select its first item. Re-selecting the active
    /// category changes nothing. Returns `true` if the category changed.
    pub fn select_category(&mut self, category: T::Category) -> bool {
        if category == self.active {
            return false;
        }
        self.active = category;
        let first = self.visible().next();
        if first.is_some() {
            self.selected = first;
        }
        tracing::debug!(?category, selected = self.selected.map(Categorized::id), "tab changed");
        true
    }

    /// Select an item of the active category by id.
    pub fn select_item(&mut self, id: &str) -> FolioResult<&'static T> {
        let item = self
            .visible()
            .find(|i| i.id() == id)
            .ok_or_else(|| {
                FolioError::content(format!("'{id}' is not in category {:?}", self.active))
            })?;
        self.selected = Some(item);
        Ok(item)
    }
}

pub type SkillTabs = CategoryTabs<Skill>;
pub type ServiceTabs = CategoryTabs<Service>;

pub fn skill_tabs() -> SkillTabs {
    CategoryTabs::new(SKILLS, SkillCategory::Frontend)
}

pub fn service_tabs() -> ServiceTabs {
    CategoryTabs::new(SERVICES, ServiceCategory::Development)
}

#[cfg(test)]
#[path = "../../tests/unit/page/tabs.rs"]
mod tests;
