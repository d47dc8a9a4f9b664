use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tv_search::models::ShowId;
use tv_search::{Config, HttpTransport, Requester};

/// Serve exactly one HTTP response on a local port and return its base URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		let (mut socket, _) = listener.accept().await.unwrap();
		let mut buf = [0u8; 2048];
		let _ = socket.read(&mut buf).await;
		let response = format!(
			"{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
			status_line,
			body.len(),
			body
		);
		socket.write_all(response.as_bytes()).await.unwrap();
		let _ = socket.shutdown().await;
	});
	format!("http://{}", addr)
}

fn requester(base_url: String) -> Requester {
	let config = Config::default().with_base_url(base_url);
	let net = Client::builder().no_proxy().build().unwrap();
	Requester::with_transport(HttpTransport::with_client(net), &config)
}

#[tokio::test]
async fn not_found_status_is_an_error() {
	let base = serve_once("HTTP/1.1 404 Not Found", "{\"status\": 404}").await;
	let err = requester(base).get_episodes(ShowId(99)).await.unwrap_err();
	assert_eq!(err.to_string(), "Status code was not 200 OK.\nCode: 404 Not Found");
}

#[tokio::test]
async fn ok_status_is_decoded() {
	let body = r#"[{"id": 10, "name": "Pilot", "season": 1, "number": 1}]"#;
	let base = serve_once("HTTP/1.1 200 OK", body).await;
	let episodes = requester(base).get_episodes(ShowId(1)).await.unwrap();
	assert_eq!(episodes.len(), 1);
	assert_eq!(episodes[0].name, "Pilot");
}
