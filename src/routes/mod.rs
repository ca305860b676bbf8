/// Router Module Index
///
/// Splits the HTTP surface by audience: the provider endpoint the dashboard fetches raw
/// route data from, and the navigation endpoints that generate and read the filtered
/// tree.

/// Health check and the route-provider endpoint.
pub mod public;

/// Generation, current collection and sidebar endpoints.
pub mod navigation;
