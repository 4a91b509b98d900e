/// Router Module Index
///
/// Organizes the application's routing logic into modules segregated by how
/// the access gate treats their paths. The module tree mirrors the gate's
/// own three-way classification, so a reader can tell a route's access rules
/// from where it is declared.

/// Pages under the public prefixes (/login, /register). The gate lets
/// anonymous visitors through and redirects signed-in ones to the todo list.
pub mod public;

/// Pages outside the public prefixes (/ , /todos, /settings). The gate
/// requires a credential cookie and redirects anonymous visitors to /login.
pub mod authenticated;

/// Routes under the excluded prefixes (/api). The gate's route matcher
/// passes these through without consulting the decision function at all.
pub mod api;
