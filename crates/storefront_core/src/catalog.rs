use shared::domain::Product;
use tracing::debug;

use crate::{
    animation::{Cue, Target},
    effects::Effects,
};

pub const ALL_PRODUCTS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub active_filter: String,
    pub filters: Vec<String>,
    pub visible: Vec<String>,
    pub hidden: Vec<String>,
}

/// Product cards and the category filter bar.
pub struct ProductCatalog {
    products: Vec<Product>,
    active_filter: String,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            active_filter: ALL_PRODUCTS.to_string(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.name.eq_ignore_ascii_case(name))
    }

    /// `"all"` followed by each category in first-seen order.
    pub fn filters(&self) -> Vec<String> {
        let mut filters = vec![ALL_PRODUCTS.to_string()];
        for product in &self.products {
            if !filters.contains(&product.category) {
                filters.push(product.category.clone());
            }
        }
        filters
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    fn matches(&self, product: &Product) -> bool {
        self.active_filter == ALL_PRODUCTS || product.category == self.active_filter
    }

    pub fn filter(&mut self, fx: &mut Effects<'_>, category: &str) {
        self.active_filter = category.to_string();
        let mut shown = 0usize;
        for product in &self.products {
            let target = Target::ProductCard(product.name.clone());
            if self.matches(product) {
                shown += 1;
                fx.cue(Cue::Show(target));
            } else {
                fx.cue(Cue::Hide(target));
            }
        }
        debug!(category, shown, "product filter applied");
    }

    pub fn view(&self) -> CatalogView {
        let (visible, hidden): (Vec<&Product>, Vec<&Product>) =
            self.products.iter().partition(|product| self.matches(product));
        CatalogView {
            active_filter: self.active_filter.clone(),
            filters: self.filters(),
            visible: visible.into_iter().map(|product| product.name.clone()).collect(),
            hidden: hidden.into_iter().map(|product| product.name.clone()).collect(),
        }
    }
}
