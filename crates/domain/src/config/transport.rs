use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    #[serde(default = "default_portmapper_port")]
    pub portmapper_port: u16,

    /// Fixed ypserv port; skips the portmapper lookup when set.
    #[serde(default)]
    pub yp_port: Option<u16>,

    /// Fixed rpc.bootparamd port; skips the portmapper lookup when set.
    #[serde(default)]
    pub bootparam_port: Option<u16>,

    #[serde(default = "default_max_reply_size")]
    pub max_reply_size: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            portmapper_port: default_portmapper_port(),
            yp_port: None,
            bootparam_port: None,
            max_reply_size: default_max_reply_size(),
        }
    }
}

fn default_portmapper_port() -> u16 {
    111
}

// UDPMSGSIZE
fn default_max_reply_size() -> usize {
    8800
}
