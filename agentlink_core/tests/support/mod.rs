/*!
 * In-process stub trace agent for integration tests.
 *
 * Listens on an ephemeral `127.0.0.1` port, answers every connection with
 * a canned response and forwards what it received through a channel so
 * tests can assert on the wire shape of the request.
 */
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};

/// What the stub does with each connection.
#[derive(Clone)]
pub enum Behaviour {
    /// Reply with `HTTP/1.1 {code} {reason}`.
    Status(u16, &'static str),
    /// Reply with these raw bytes verbatim.
    Raw(&'static [u8]),
    /// Read the request, then hold the connection without answering.
    Silent(Duration),
}

/// A request as the stub received it.
#[derive(Debug, Clone)]
pub struct Captured {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub struct StubAgent {
    pub port: u16,
    pub requests: Receiver<Captured>,
}

impl StubAgent {
    pub fn start(behaviour: Behaviour) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub agent");
        let port = listener.local_addr().expect("stub agent address").port();
        let (sender, requests) = crossbeam_channel::unbounded();

        thread::Builder::new()
            .name("stub-agent".into())
            .spawn(move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { break };
                    let sender = sender.clone();
                    let behaviour = behaviour.clone();
                    thread::spawn(move || serve(stream, &behaviour, &sender));
                }
            })
            .expect("spawn stub agent");

        Self { port, requests }
    }
}

fn serve(stream: TcpStream, behaviour: &Behaviour, sender: &Sender<Captured>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
    let Some(captured) = read_request(&mut reader) else {
        return;
    };
    let _ = sender.send(captured);

    let mut stream = stream;
    match behaviour {
        Behaviour::Status(code, reason) => {
            let response = format!(
                "HTTP/1.1 {code} {reason}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Behaviour::Raw(bytes) => {
            let _ = stream.write_all(bytes);
        }
        Behaviour::Silent(hold) => {
            thread::sleep(*hold);
        }
    }
    let _ = stream.flush();
}

fn read_request(reader: &mut BufReader<TcpStream>) -> Option<Captured> {
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            return None;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = vec![0; length];
    reader.read_exact(&mut body).ok()?;

    Some(Captured {
        request_line: request_line.trim_end().to_string(),
        headers,
        body,
    })
}
