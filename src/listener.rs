use std::io::Error as IoError;
use std::net::{SocketAddr as StdSocketAddr, ToSocketAddrs};
use std::pin::Pin;
use std::task::{Context, Poll};

use hyper::server::accept::Accept;
use hyper::server::conn::{AddrIncoming, AddrStream};
use tokio::io::{AsyncRead, AsyncWrite};

use crate::addr::SocketAddr;
use crate::error::Error;

/// A connection that can report the peer it was accepted from.
pub trait Transport: AsyncRead + AsyncWrite {
    fn remote_addr(&self) -> Option<SocketAddr>;
}

impl Transport for AddrStream {
    fn remote_addr(&self) -> Option<SocketAddr> {
        Some(AddrStream::remote_addr(self).into())
    }
}

pub trait Listener: Accept {}

/// TCP connection source for [`crate::server::Server`].
pub struct TcpListener {
    incoming: AddrIncoming,
}

impl TcpListener {
    pub fn incoming(&self) -> &AddrIncoming {
        &self.incoming
    }
    pub fn local_addr(&self) -> StdSocketAddr {
        self.incoming.local_addr()
    }
    /// Panics when the address cannot be bound; use
    /// [`TcpListener::try_bind`] to handle the error.
    pub fn bind(incoming: impl IntoAddrIncoming) -> Self {
        Self::try_bind(incoming).expect("failed to bind address")
    }
    pub fn try_bind(incoming: impl IntoAddrIncoming) -> crate::Result<Self> {
        Ok(TcpListener {
            incoming: incoming.into_incoming()?,
        })
    }
}

impl Listener for TcpListener {}
impl Accept for TcpListener {
    type Conn = AddrStream;
    type Error = IoError;

    fn poll_accept(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Conn, Self::Error>>> {
        Pin::new(&mut self.get_mut().incoming).poll_accept(cx)
    }
}

pub trait IntoAddrIncoming {
    fn into_incoming(self) -> crate::Result<AddrIncoming>;
}

impl IntoAddrIncoming for StdSocketAddr {
    fn into_incoming(self) -> crate::Result<AddrIncoming> {
        let mut incoming = AddrIncoming::bind(&self)?;
        incoming.set_nodelay(true);
        Ok(incoming)
    }
}

impl IntoAddrIncoming for AddrIncoming {
    fn into_incoming(self) -> crate::Result<AddrIncoming> {
        Ok(self)
    }
}

impl<T: ToSocketAddrs + ?Sized> IntoAddrIncoming for &T {
    fn into_incoming(self) -> crate::Result<AddrIncoming> {
        let mut last_err = None;
        for addr in self.to_socket_addrs()? {
            match AddrIncoming::bind(&addr) {
                Ok(mut incoming) => {
                    incoming.set_nodelay(true);
                    return Ok(incoming);
                }
                Err(e) => last_err = Some(e),
            }
        }
        match last_err {
            Some(e) => Err(e.into()),
            None => Err(Error::other("no address to bind")),
        }
    }
}
