//! Component registry and startup inspector.
//!
//! The registry is an explicit list of component names maintained by the
//! entry point: each piece of the application wired at startup registers its
//! name, and extra names can come from the `[registry]` config section. The
//! inspector prints a header line followed by every registered name in sorted
//! order, once, before the server starts accepting connections.

use std::io::{self, Write};

use crate::config::INSPECT_HEADER;

/// Explicit registry of component names known to the application.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    names: Vec<String>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single component name.
    pub fn register(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Register every name from an iterator, e.g. the config-supplied list.
    pub fn extend<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.names.extend(names);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Write the inspection report: the fixed header line, then each
    /// registered name sorted ascending, one per line.
    ///
    /// An empty registry produces the header and nothing else. Registration
    /// order does not matter; output order is always lexicographic.
    pub fn inspect<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", INSPECT_HEADER)?;

        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        for name in names {
            writeln!(out, "{}", name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspect_to_string(registry: &ComponentRegistry) -> String {
        let mut out = Vec::new();
        registry.inspect(&mut out).expect("inspect should not fail");
        String::from_utf8(out).expect("inspector output should be UTF-8")
    }

    #[test]
    fn prints_header_then_sorted_names() {
        let mut registry = ComponentRegistry::new();
        registry.register("zebra");
        registry.register("alpha");
        registry.register("beta");

        let output = inspect_to_string(&registry);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec![INSPECT_HEADER, "alpha", "beta", "zebra"]);
    }

    #[test]
    fn empty_registry_prints_header_only() {
        let registry = ComponentRegistry::new();
        assert!(registry.is_empty());

        let output = inspect_to_string(&registry);
        assert_eq!(output, format!("{}\n", INSPECT_HEADER));
    }

    #[test]
    fn sort_is_case_sensitive() {
        let mut registry = ComponentRegistry::new();
        registry.register("banana");
        registry.register("Apple");
        registry.register("apple");

        let output = inspect_to_string(&registry);
        let lines: Vec<&str> = output.lines().skip(1).collect();
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(lines, vec!["Apple", "apple", "banana"]);
    }

    #[test]
    fn extend_merges_config_names() {
        let mut registry = ComponentRegistry::new();
        registry.register("http_server");
        registry.extend(vec!["custom_component".to_string()]);

        assert_eq!(registry.len(), 2);
        let output = inspect_to_string(&registry);
        assert!(output.contains("custom_component"));
        assert!(output.contains("http_server"));
    }
}
