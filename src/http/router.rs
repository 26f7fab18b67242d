//! Route table
//!
//! Routes are checked in order and the first match wins. Method filtering
//! comes first, so an unsupported method never reaches a path rule.

use crate::files::FileStore;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// What a matched route does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MethodNotAllowed,
    Root,
    Echo,
    UserAgent,
    Files,
    NotFound,
}

/// A predicate over the request paired with the action it selects.
pub struct Route {
    pub name: &'static str,
    pub matches: fn(&Request) -> bool,
    pub action: Action,
}

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";

fn unsupported_method(req: &Request) -> bool {
    !req.method.is_supported()
}

fn is_root(req: &Request) -> bool {
    req.method == Method::GET && req.path == "/"
}

fn is_echo(req: &Request) -> bool {
    req.method == Method::GET && req.path.starts_with(ECHO_PREFIX)
}

fn is_user_agent(req: &Request) -> bool {
    req.method == Method::GET && req.path == "/user-agent"
}

fn is_files(req: &Request) -> bool {
    req.path.starts_with(FILES_PREFIX)
}

pub const ROUTES: &[Route] = &[
    Route {
        name: "method-not-allowed",
        matches: unsupported_method,
        action: Action::MethodNotAllowed,
    },
    Route {
        name: "root",
        matches: is_root,
        action: Action::Root,
    },
    Route {
        name: "echo",
        matches: is_echo,
        action: Action::Echo,
    },
    Route {
        name: "user-agent",
        matches: is_user_agent,
        action: Action::UserAgent,
    },
    Route {
        name: "files",
        matches: is_files,
        action: Action::Files,
    },
];

/// Picks the action for a request. Falls back to [`Action::NotFound`].
pub fn select(req: &Request) -> Action {
    ROUTES
        .iter()
        .find(|route| (route.matches)(req))
        .map(|route| {
            tracing::trace!(route = route.name, "Route matched");
            route.action
        })
        .unwrap_or(Action::NotFound)
}

/// Turns requests into responses.
#[derive(Debug, Clone, Default)]
pub struct Router {
    files: FileStore,
}

impl Router {
    pub fn new(files: FileStore) -> Self {
        Self { files }
    }

    pub async fn handle(&self, req: &Request) -> Response {
        match select(req) {
            Action::MethodNotAllowed => Response::method_not_allowed(),
            Action::Root => Response::ok(),
            Action::Echo => Response::text(&req.path[ECHO_PREFIX.len()..]),
            Action::UserAgent => Response::text(req.user_agent()),
            Action::Files => self.handle_files(req).await,
            Action::NotFound => Response::not_found(),
        }
    }

    async fn handle_files(&self, req: &Request) -> Response {
        let name = &req.path[FILES_PREFIX.len()..];

        match req.method {
            Method::GET => match self.files.download(name).await {
                Ok(contents) => Response::octet_stream(contents),
                Err(e) => {
                    tracing::warn!(file = name, error = %e, "Download failed");
                    e.response()
                }
            },
            Method::POST => match self.files.upload(name, &req.body).await {
                Ok(()) => {
                    tracing::info!(file = name, bytes = req.body.len(), "Upload stored");
                    Response::created()
                }
                Err(e) => {
                    tracing::error!(file = name, error = %e, "Upload failed");
                    e.response()
                }
            },
            Method::Other(_) => Response::method_not_allowed(),
        }
    }
}
