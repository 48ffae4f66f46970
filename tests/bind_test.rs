//! Server startup behaviour: the listen port is held exclusively.

use tokio::net::TcpListener;

#[tokio::test]
async fn second_bind_on_the_same_port_fails() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let err = TcpListener::bind(addr)
        .await
        .expect_err("second bind on an occupied port must fail");
    assert_eq!(err.kind(), std::io::ErrorKind::AddrInUse);
}
