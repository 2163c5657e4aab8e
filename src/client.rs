//! Single-connection client: send one request, await its response.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::protocol::visualize::hex_dump;
use crate::protocol::{check_frame_len, decode_response, encode_request, ApiRequest};
use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info, trace, warn, Instrument};

/// A connection with at most one request in flight.
///
/// Every operation takes `&mut self`, so requests on one connection are
/// serialized; independent connections share nothing.
pub struct Client {
    stream: TcpStream,
    config: ClientConfig,
    next_correlation_id: i32,
}

impl Client {
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let stream = TcpStream::connect(&config.addr).await?;
        info!(addr = %config.addr, "connected");
        Ok(Self::from_stream(stream, config))
    }

    pub fn from_stream(stream: TcpStream, config: ClientConfig) -> Self {
        Self {
            stream,
            config,
            next_correlation_id: 0,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send `request` with the next correlation id and decode its response.
    pub async fn send<R: ApiRequest>(&mut self, request: &R) -> Result<R::Response> {
        let correlation_id = self.next_correlation_id;
        self.next_correlation_id = self.next_correlation_id.wrapping_add(1);
        self.send_with_correlation_id(request, correlation_id).await
    }

    pub async fn send_with_correlation_id<R: ApiRequest>(
        &mut self,
        request: &R,
        correlation_id: i32,
    ) -> Result<R::Response> {
        let span = tracing::info_span!(
            "kafka_wire.request",
            api_key = R::API_KEY,
            api_version = R::API_VERSION,
            correlation_id
        );
        self.exchange(request, correlation_id).instrument(span).await
    }

    async fn exchange<R: ApiRequest>(
        &mut self,
        request: &R,
        correlation_id: i32,
    ) -> Result<R::Response> {
        let header = R::header(correlation_id, Some(&self.config.client_id));
        let frame = encode_request(&header, R::REQUEST_HEADER_VERSION, request)?;
        debug!(len = frame.len(), "sending request");
        trace!(frame = %hex_dump(&frame), "request frame");
        self.stream.write_all(&frame).await?;
        self.stream.flush().await?;

        let mut body = self.read_frame().await?;
        debug!(len = body.len(), "received response");
        trace!(body = %hex_dump(&body), "response body");
        let (_, response) = decode_response::<R::Response, _>(
            &mut body,
            R::RESPONSE_HEADER_VERSION,
            correlation_id,
        )
        .inspect_err(|e| warn!("response rejected: {}", e))?;
        Ok(response)
    }

    /// Read one frame body. `read_exact` keeps reading until the declared
    /// length has arrived, and fails if the peer closes first.
    async fn read_frame(&mut self) -> Result<BytesMut> {
        let mut prefix = [0u8; 4];
        self.stream.read_exact(&mut prefix).await?;
        let len = check_frame_len(i32::from_be_bytes(prefix), self.config.max_frame_len)?;
        let mut body = BytesMut::zeroed(len);
        self.stream.read_exact(&mut body).await?;
        Ok(body)
    }
}
