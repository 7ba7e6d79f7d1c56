//! Fixed, ordered page registry built once at startup.

use heapless::{String, Vec};
use log::debug;

pub const MAX_PAGES: usize = 32;
pub const PAGE_NAME_BYTES: usize = 48;
pub const MAX_FRAGMENTS: usize = 24;

/// Opaque handle to one revealable piece of page content.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FragmentId(pub u32);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    Empty,
    TooManyPages,
    NameTooLong,
    TooManyFragments,
}

/// One page of the book. `index` is its only identity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    index: u16,
    name: String<PAGE_NAME_BYTES>,
    scrollable: bool,
    fragments: Vec<FragmentId, MAX_FRAGMENTS>,
}

impl Page {
    pub fn index(&self) -> u16 {
        self.index
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the page has an inner region that scrolls independently.
    pub fn has_scrollable_content(&self) -> bool {
        self.scrollable
    }

    /// Fragments in document order.
    pub fn fragments(&self) -> &[FragmentId] {
        &self.fragments
    }
}

#[derive(Debug, Default)]
pub struct PageRegistryBuilder {
    pages: Vec<Page, MAX_PAGES>,
}

impl PageRegistryBuilder {
    /// Append a page and return the index it was given.
    pub fn push_page<I>(
        &mut self,
        name: &str,
        scrollable: bool,
        fragments: I,
    ) -> Result<u16, RegistryError>
    where
        I: IntoIterator<Item = FragmentId>,
    {
        let index = self.pages.len() as u16;

        let mut stored_name = String::new();
        stored_name
            .push_str(name)
            .map_err(|_| RegistryError::NameTooLong)?;

        let mut stored_fragments = Vec::new();
        for fragment in fragments {
            stored_fragments
                .push(fragment)
                .map_err(|_| RegistryError::TooManyFragments)?;
        }

        self.pages
            .push(Page {
                index,
                name: stored_name,
                scrollable,
                fragments: stored_fragments,
            })
            .map_err(|_| RegistryError::TooManyPages)?;

        Ok(index)
    }

    pub fn build(self) -> Result<PageRegistry, RegistryError> {
        if self.pages.is_empty() {
            return Err(RegistryError::Empty);
        }

        debug!("pages: registry built total={}", self.pages.len());
        Ok(PageRegistry { pages: self.pages })
    }
}

/// Immutable ordered page set. Never empty.
#[derive(Clone, Debug)]
pub struct PageRegistry {
    pages: Vec<Page, MAX_PAGES>,
}

impl PageRegistry {
    pub fn builder() -> PageRegistryBuilder {
        PageRegistryBuilder::default()
    }

    pub fn len(&self) -> u16 {
        self.pages.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn last_index(&self) -> u16 {
        self.len().saturating_sub(1)
    }

    pub fn get(&self, index: u16) -> Option<&Page> {
        self.pages.get(index as usize)
    }

    pub fn name_at(&self, index: u16) -> Option<&str> {
        self.get(index).map(Page::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(Page::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_get_sequential_indices() {
        let mut builder = PageRegistry::builder();
        assert_eq!(builder.push_page("Cover", false, []), Ok(0));
        assert_eq!(
            builder.push_page("Chapter", true, [FragmentId(7), FragmentId(9)]),
            Ok(1)
        );
        let registry = builder.build().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.last_index(), 1);
        assert_eq!(registry.name_at(1), Some("Chapter"));
        assert!(registry.get(1).unwrap().has_scrollable_content());
        assert_eq!(
            registry.get(1).unwrap().fragments(),
            &[FragmentId(7), FragmentId(9)]
        );
        assert_eq!(registry.name_at(2), None);
    }

    #[test]
    fn empty_registry_is_rejected() {
        assert_eq!(
            PageRegistry::builder().build().unwrap_err(),
            RegistryError::Empty
        );
    }

    #[test]
    fn capacity_limits_are_reported() {
        let mut builder = PageRegistry::builder();
        let long_name = "x".repeat(PAGE_NAME_BYTES + 1);
        assert_eq!(
            builder.push_page(&long_name, false, []),
            Err(RegistryError::NameTooLong)
        );

        let fragments = (0..=MAX_FRAGMENTS as u32).map(FragmentId);
        assert_eq!(
            builder.push_page("Dense", false, fragments),
            Err(RegistryError::TooManyFragments)
        );

        for _ in 0..MAX_PAGES {
            builder.push_page("Page", false, []).unwrap();
        }
        assert_eq!(
            builder.push_page("Overflow", false, []),
            Err(RegistryError::TooManyPages)
        );
    }
}
