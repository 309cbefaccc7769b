use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:8300".to_string());
    let listener = TcpListener::bind(&addr).await?;
    println!("mock rates listening on http://{addr}");
    mock_rates::run(listener, mock_rates::router()).await
}
