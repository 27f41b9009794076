use crate::{Result, RuntimeConsole, Spec};

/// # Spec discovery
/// Renders the component library inside a sandbox and reports every spec it
/// finds, in discovery order.
///
/// Errors and warnings printed by the rendered code must be written to the
/// given console instead of being returned. Only an unrecoverable sandbox
/// failure should return `Err`.
///
/// ## Example
///
/// ```rust
/// struct StaticDiscovery;
///
/// #[specflight::async_trait]
/// impl specflight::SpecDiscovery for StaticDiscovery {
///   async fn discover(
///     &self,
///     console: specflight::RuntimeConsole,
///   ) -> specflight::Result<Vec<specflight::Spec>> {
///     console.warn("Button: prop `size` is deprecated");
///
///     Ok(vec![specflight::Spec::new("Button", "primary")])
///   }
/// }
/// ```
#[async_trait::async_trait]
pub trait SpecDiscovery: Send + Sync {
  async fn discover(&self, console: RuntimeConsole) -> Result<Vec<Spec>>;
}
