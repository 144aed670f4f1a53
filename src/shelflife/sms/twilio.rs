use super::MessageSender;
use crate::config::GatewayConfig;
use crate::error::{InventoryError, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_API_BASE: &str = "https://api.twilio.com/2010-04-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends SMS through Twilio's Messages resource.
///
/// Owns its HTTP client; build it once and reuse it for every alert.
pub struct TwilioSender {
    client: Client,
    api_base: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioSender {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let field = |value: &Option<String>, name: &str| {
            value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| InventoryError::Config(format!("SMS gateway {} is not set", name)))
        };
        let account_sid = field(&config.account_sid, "account_sid")?;
        let auth_token = field(&config.auth_token, "auth_token")?;
        let from_number = field(&config.from_number, "from_number")?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InventoryError::Config(format!("failed to build HTTP client: {}", e)))?;

        let sender = Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            account_sid,
            auth_token,
            from_number,
        };
        Ok(match config.api_base.as_deref() {
            Some(base) if !base.trim().is_empty() => sender.with_api_base(base.trim()),
            _ => sender,
        })
    }

    /// Point the sender at another API root (a local stub, a regional edge).
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        )
    }
}

impl MessageSender for TwilioSender {
    #[instrument(skip(self, body))]
    fn send(&mut self, to: &str, body: &str) -> Result<()> {
        let form = [("To", to), ("From", self.from_number.as_str()), ("Body", body)];
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .map_err(|e| InventoryError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(InventoryError::Delivery(format!(
                "gateway answered HTTP {}: {}",
                status, detail
            )));
        }

        debug!(%status, "message accepted by gateway");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn complete() -> GatewayConfig {
        GatewayConfig {
            account_sid: Some("AC123".into()),
            auth_token: Some("secret".into()),
            from_number: Some("+15550100".into()),
            api_base: None,
        }
    }

    #[test]
    fn builds_messages_url_from_account() {
        let sender = TwilioSender::new(&complete()).unwrap();
        assert_eq!(
            sender.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );

        let local = sender.with_api_base("http://127.0.0.1:9/");
        assert_eq!(
            local.messages_url(),
            "http://127.0.0.1:9/Accounts/AC123/Messages.json"
        );
    }

    #[test]
    fn honours_configured_api_base() {
        let mut config = complete();
        config.api_base = Some("http://localhost:4010/".into());
        let sender = TwilioSender::new(&config).unwrap();
        assert_eq!(
            sender.messages_url(),
            "http://localhost:4010/Accounts/AC123/Messages.json"
        );
    }

    #[test]
    fn refuses_incomplete_credentials() {
        let mut config = complete();
        config.auth_token = Some("  ".into());
        let err = TwilioSender::new(&config).err().unwrap();
        assert!(err.to_string().contains("auth_token"));
    }

    #[test]
    fn unreachable_gateway_is_a_delivery_error() {
        // Port 9 (discard) is closed on test machines; the connect fails fast.
        let mut sender = TwilioSender::new(&complete())
            .unwrap()
            .with_api_base("http://127.0.0.1:9");
        let err = sender.send("+15550123", "hello").unwrap_err();
        assert!(matches!(err, InventoryError::Delivery(_)));
    }

    /// Accepts one connection, answers with `status`, and returns the raw
    /// request (head and body) it received.
    fn one_shot_gateway(status: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let content_length = text[..head_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if raw.len() >= head_end + 4 + content_length {
                        break;
                    }
                }
            }

            let body = "{}";
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .unwrap();
            String::from_utf8(raw).unwrap()
        });

        (base, handle)
    }

    #[test]
    fn posts_form_with_basic_auth() {
        let (base, gateway) = one_shot_gateway("201 Created");
        let mut sender = TwilioSender::new(&complete()).unwrap().with_api_base(&base);

        sender.send("+15550123", "Milk expires today!").unwrap();

        let request = gateway.join().unwrap();
        assert!(request.starts_with("POST /Accounts/AC123/Messages.json HTTP/1.1\r\n"));
        let auth = request
            .lines()
            .find(|line| line.to_ascii_lowercase().starts_with("authorization:"))
            .unwrap();
        // base64("AC123:secret")
        assert_eq!(auth.split_once(':').unwrap().1.trim(), "Basic QUMxMjM6c2VjcmV0");
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));

        let body = request.split("\r\n\r\n").nth(1).unwrap();
        assert_eq!(
            body,
            "To=%2B15550123&From=%2B15550100&Body=Milk+expires+today%21"
        );
    }

    #[test]
    fn rejected_request_is_a_delivery_error() {
        let (base, gateway) = one_shot_gateway("400 Bad Request");
        let mut sender = TwilioSender::new(&complete()).unwrap().with_api_base(&base);

        let err = sender.send("+15550123", "hello").unwrap_err();
        gateway.join().unwrap();

        match err {
            InventoryError::Delivery(detail) => assert!(detail.contains("400")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
