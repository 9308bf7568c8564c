// Canned-response HTTP server for exercising the collection client offline
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct MockApi {
	pub base: String,
	hits: Arc<AtomicUsize>,
}

impl MockApi {
	/// Serve `routes` (path without query -> (status, body)); anything else is a 404.
	pub fn start(routes: Vec<(&str, u16, &str)>) -> Self {
		// reqwest honours proxy variables; the mock lives on loopback
		std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

		let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
		let base = format!("http://{}", listener.local_addr().unwrap());
		let routes: HashMap<String, (u16, String)> = routes
			.into_iter()
			.map(|(path, status, body)| (path.to_string(), (status, body.to_string())))
			.collect();
		let hits = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&hits);

		thread::spawn(move || {
			for stream in listener.incoming() {
				let Ok(mut stream) = stream else { continue };
				let mut reader = BufReader::new(stream.try_clone().unwrap());

				let mut request_line = String::new();
				if reader.read_line(&mut request_line).is_err() {
					continue;
				}
				loop {
					let mut line = String::new();
					match reader.read_line(&mut line) {
						Ok(0) | Err(_) => break,
						Ok(_) if line == "\r\n" => break,
						Ok(_) => {}
					}
				}
				counter.fetch_add(1, Ordering::SeqCst);

				let target = request_line.split_whitespace().nth(1).unwrap_or("/");
				let path = target.split('?').next().unwrap_or(target);
				let (status, body) = routes
					.get(path)
					.cloned()
					.unwrap_or((404, r#"{"message":"Not a valid object"}"#.to_string()));

				let response = format!(
					"HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
					status,
					if status < 400 { "OK" } else { "Error" },
					body.len(),
					body
				);
				let _ = stream.write_all(response.as_bytes());
				let _ = stream.flush();
			}
		});

		Self { base, hits }
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base, path)
	}

	pub fn hits(&self) -> usize {
		self.hits.load(Ordering::SeqCst)
	}
}

/// Small department: five listed objects, one of them missing upstream,
/// one with malformed tags, one with a single tag.
pub fn medieval_department() -> MockApi {
	MockApi::start(vec![
		("/objects", 200, r#"{"total":5,"objectIDs":[101,102,103,104,105]}"#),
		(
			"/objects/101",
			200,
			r#"{"objectID":101,"tags":[{"term":"Lions","AAT_URL":"x"},{"term":"Saints"},{"term":"Crosses"}]}"#,
		),
		("/objects/102", 200, r#"{"objectID":102,"tags":[{"term":"Saints"},{"term":"Lions"}]}"#),
		("/objects/103", 200, r#"{"objectID":103,"tags":null}"#),
		("/objects/105", 200, r#"{"objectID":105,"tags":[{"term":"Horses"}]}"#),
	])
}
