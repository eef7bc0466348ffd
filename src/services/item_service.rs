//! In-memory item catalogue backing the paginated listings.

use log::debug;

use crate::models::Item;
use crate::paginate::Paginator;

const CATEGORIES: [&str; 3] = ["books", "music", "games"];

/// One page of a listing plus the figures needed to link around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl ItemPage {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page.max(1))
    }
}

impl Paginator for ItemPage {
    fn has_more_pages(&self) -> bool {
        self.page < self.total_pages()
    }
}

pub struct ItemService {
    items: Vec<Item>,
    default_per_page: u64,
}

impl ItemService {
    pub fn new(items: Vec<Item>, default_per_page: u64) -> Self {
        Self {
            items,
            default_per_page: default_per_page.max(1),
        }
    }

    /// A catalogue of `count` items spread evenly over the known categories.
    pub fn seeded(count: u64, default_per_page: u64) -> Self {
        let items = (1..=count)
            .map(|id| Item {
                id,
                name: format!("Item {}", id),
                category: CATEGORIES[(id as usize - 1) % CATEGORIES.len()].to_string(),
            })
            .collect();
        Self::new(items, default_per_page)
    }

    pub fn default_per_page(&self) -> u64 {
        self.default_per_page
    }

    /// Slice out `page`, optionally restricted to one category.
    pub fn list(&self, category: Option<&str>, page: u64, per_page: u64) -> ItemPage {
        let per_page = per_page.max(1);
        let matching: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect();

        let offset = page.saturating_sub(1).saturating_mul(per_page);
        let items: Vec<Item> = matching
            .iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(per_page as usize)
            .map(|item| (*item).clone())
            .collect();

        debug!(
            "Listing page {} ({} per page, category {:?}): {} of {} item(s)",
            page,
            per_page,
            category,
            items.len(),
            matching.len()
        );

        ItemPage {
            items,
            total: matching.len() as u64,
            page,
            per_page,
        }
    }
}
