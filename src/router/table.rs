//! # Route Table
//!
//! A static, ordered path → view mapping, built once at start-up.
//!
//! Paths are matched by exact string equality. Construction rejects duplicate
//! paths, so resolution never depends on declaration order.

use std::collections::HashMap;
use thiserror::Error;

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    pub path: String,
    pub view: V,
}

impl<V> Route<V> {
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("duplicate route path {path:?} (entries {first} and {duplicate})")]
    DuplicatePath {
        path: String,
        first: usize,
        duplicate: usize,
    },
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a, V> {
    Found(&'a V),
    /// No entry matches; carries the path that was looked up.
    NotFound(&'a str),
}

impl<'a, V> Resolution<'a, V> {
    pub fn view(&self) -> Option<&'a V> {
        match self {
            Resolution::Found(view) => Some(view),
            Resolution::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    index: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
    /// Build a table, failing on the first duplicated path.
    pub fn new(routes: Vec<Route<V>>) -> Result<Self, RouteTableError> {
        let mut index = HashMap::with_capacity(routes.len());
        for (position, route) in routes.iter().enumerate() {
            if let Some(&first) = index.get(&route.path) {
                return Err(RouteTableError::DuplicatePath {
                    path: route.path.clone(),
                    first,
                    duplicate: position,
                });
            }
            index.insert(route.path.clone(), position);
        }
        Ok(Self { routes, index })
    }

    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder { routes: Vec::new() }
    }

    pub fn resolve<'a>(&'a self, path: &'a str) -> Resolution<'a, V> {
        match self.index.get(path) {
            Some(&position) => Resolution::Found(&self.routes[position].view),
            None => Resolution::NotFound(path),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Entries in declaration order.
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

pub struct RouteTableBuilder<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTableBuilder<V> {
    pub fn route(mut self, path: impl Into<String>, view: V) -> Self {
        self.routes.push(Route::new(path, view));
        self
    }

    pub fn build(self) -> Result<RouteTable<V>, RouteTableError> {
        RouteTable::new(self.routes)
    }
}
