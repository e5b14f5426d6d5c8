//! Render surface boundary: named page regions with text and flags.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Write as _,
};

use shared::domain::NotificationId;

use crate::fields::OrderField;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Page,
    Modal,
    ProductName,
    Price,
    OriginalPrice,
    Quantity,
    Total,
    SubmitButton,
    SubmitLabel,
    SubmitSpinner,
    OrderField(OrderField),
    CartCount,
    Toast(NotificationId),
    ContactSubmit,
    ContactField(String),
    ProductCard(String),
    FilterButton(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Hidden,
    Disabled,
    Invalid,
    Active,
    ScrollLocked,
    Success,
    Error,
}

pub trait RenderSurface {
    fn set_text(&mut self, region: &Region, text: &str);
    fn text(&self, region: &Region) -> Option<String>;
    fn set_attribute(&mut self, region: &Region, attribute: Attribute, on: bool);
    fn attribute(&self, region: &Region, attribute: Attribute) -> bool;
    /// Drops the region's text and flags.
    fn remove(&mut self, region: &Region);
}

/// In-process surface used by the terminal front end and tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    texts: BTreeMap<Region, String>,
    attributes: BTreeSet<(Region, Attribute)>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_region(&self, region: &Region) -> bool {
        self.texts.contains_key(region)
            || self.attributes.iter().any(|(candidate, _)| candidate == region)
    }

    pub fn toasts(&self) -> Vec<NotificationId> {
        self.texts
            .keys()
            .filter_map(|region| match region {
                Region::Toast(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// One line per region, flags in brackets.
    pub fn dump(&self) -> String {
        let mut regions: BTreeSet<&Region> = self.texts.keys().collect();
        regions.extend(self.attributes.iter().map(|(region, _)| region));

        let mut out = String::new();
        for region in regions {
            let text = self.texts.get(region).map(String::as_str).unwrap_or("");
            let flags: Vec<String> = self
                .attributes
                .iter()
                .filter(|(candidate, _)| candidate == region)
                .map(|(_, attribute)| format!("{attribute:?}").to_ascii_lowercase())
                .collect();
            if flags.is_empty() {
                let _ = writeln!(out, "{region:?}: {text}");
            } else {
                let _ = writeln!(out, "{region:?}: {text} [{}]", flags.join(","));
            }
        }
        out
    }
}

impl RenderSurface for MemorySurface {
    /// Empty text keeps the region on the page; only `remove` drops it.
    fn set_text(&mut self, region: &Region, text: &str) {
        self.texts.insert(region.clone(), text.to_string());
    }

    fn text(&self, region: &Region) -> Option<String> {
        self.texts.get(region).cloned()
    }

    fn set_attribute(&mut self, region: &Region, attribute: Attribute, on: bool) {
        if on {
            self.attributes.insert((region.clone(), attribute));
        } else {
            self.attributes.remove(&(region.clone(), attribute));
        }
    }

    fn attribute(&self, region: &Region, attribute: Attribute) -> bool {
        self.attributes.contains(&(region.clone(), attribute))
    }

    fn remove(&mut self, region: &Region) {
        self.texts.remove(region);
        self.attributes.retain(|(candidate, _)| candidate != region);
    }
}
