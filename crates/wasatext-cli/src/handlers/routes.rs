//! Navigation table commands.

use url::Url;
use wasatext_core::{RouteTable, View, fragment_of};

use crate::bootstrap::CliContext;
use crate::presentation::render_routes;

/// Print the navigation table.
pub fn execute(ctx: &CliContext) {
    print!("{}", render_routes(&ctx.routes));
}

/// Fragment named by `input`: the fragment of a full URL, or `input` itself.
pub fn fragment_from_input(input: &str) -> String {
    Url::parse(input).map_or_else(|_| input.to_string(), |url| fragment_of(&url).to_string())
}

/// Exact-match resolution of a fragment or full URL.
pub fn resolve(table: &RouteTable, input: &str) -> Option<View> {
    table.resolve(&fragment_from_input(input))
}

/// Text printed by the `resolve` command.
///
/// A view name prints the path the view is shown at; anything else is
/// treated as a fragment or full URL.
pub fn describe_resolution(table: &RouteTable, input: &str) -> String {
    if let Some(view) = View::parse(input) {
        return match table.path_for(view) {
            Some(path) => format!("{view} -> {path}"),
            None => format!("{view} -> no route"),
        };
    }

    let fragment = fragment_from_input(input);
    match table.resolve(&fragment) {
        Some(view) => format!("{fragment} -> {view}"),
        None => format!("{fragment} -> no route"),
    }
}

/// Resolve a fragment or URL and print the result.
pub fn execute_resolve(ctx: &CliContext, input: &str) {
    println!("{}", describe_resolution(&ctx.routes, input));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_from_url() {
        assert_eq!(fragment_from_input("http://localhost:5173/#/chats"), "/chats");
        assert_eq!(fragment_from_input("http://localhost:5173/"), "/");
        assert_eq!(fragment_from_input("/profile"), "/profile");
    }

    #[test]
    fn test_resolve_inputs() {
        let table = RouteTable::canonical();
        assert_eq!(resolve(&table, "/chats"), Some(View::ChatList));
        assert_eq!(
            resolve(&table, "http://localhost:5173/#/search"),
            Some(View::Search)
        );
        assert_eq!(resolve(&table, "/nonexistent"), None);
    }

    #[test]
    fn test_describe_resolution() {
        let table = RouteTable::canonical();
        assert_eq!(describe_resolution(&table, "/nonexistent"), "/nonexistent -> no route");
        assert!(describe_resolution(&table, "/login").starts_with("/login -> "));
    }

    #[test]
    fn test_describe_view_name_prints_its_path() {
        let table = RouteTable::canonical();
        assert_eq!(describe_resolution(&table, "chat-list"), "chat-list -> /chats");
        assert_eq!(describe_resolution(&table, "login"), "login -> /");
        assert_eq!(describe_resolution(&table, "home"), "home -> no route");
    }
}
