//! HTTP client module for the Rick and Morty REST API.
//!
//! `ApiClient` performs the raw paginated requests; `CharacterFetcher` wraps
//! one client and exposes the outcome of the latest fetch (items, loading,
//! error, pagination flags) for the UI to observe.
//!
//! The API is public and unauthenticated.

pub mod client;
pub mod error;
pub mod fetch;

pub use client::ApiClient;
pub use error::ApiError;
pub use fetch::CharacterFetcher;

#[cfg(test)]
pub(crate) mod testutil {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// A page-1 response body matching the live API's shape.
    pub const PAGE_ONE_BODY: &str = r#"{
        "info": {
            "count": 826,
            "pages": 5,
            "next": "https://rickandmortyapi.com/api/character?page=2",
            "prev": null
        },
        "results": [
            {
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "origin": {"name": "Earth (C-137)", "url": ""},
                "location": {"name": "Citadel of Ricks", "url": ""},
                "image": "",
                "episode": [],
                "url": "",
                "created": ""
            }
        ]
    }"#;

    /// Bind a local listener that answers the next HTTP request with a canned
    /// response, returning the base URL to point the client at.
    pub async fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };

            // Drain the request headers before answering
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => return,
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        });

        format!("http://{}", addr)
    }
}
