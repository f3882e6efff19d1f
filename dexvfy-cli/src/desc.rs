//! YAML method descriptions.
//!
//! ```yaml
//! class: Lcom/example/Foo;
//! name: bar
//! proto: ()V
//! insns: [0x0012, 0x000e]
//! tries:
//!   - start: 0
//!     count: 1
//!     handlers: [{ type_idx: 3, addr: 1 }]
//!     catch_all: 1
//! ```
//!
//! Tries listing identical handlers share one encoded handler group.

use dexvfy_file::{CatchHandler, CodeItem, CodeItemBuilder, MethodId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MethodDesc {
    #[serde(default = "default_class")]
    pub class: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_proto")]
    pub proto: String,
    #[serde(default)]
    pub registers: u16,
    pub insns: Vec<u16>,
    #[serde(default)]
    pub tries: Vec<TryDesc>,
}

#[derive(Debug, Deserialize)]
pub struct TryDesc {
    pub start: u32,
    pub count: u32,
    #[serde(default)]
    pub handlers: Vec<HandlerDesc>,
    pub catch_all: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct HandlerDesc {
    pub type_idx: u32,
    pub addr: u32,
}

fn default_class() -> String {
    "LUnknown;".into()
}

fn default_name() -> String {
    "unknown".into()
}

fn default_proto() -> String {
    "()V".into()
}

impl MethodDesc {
    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn method_id(&self) -> MethodId {
        MethodId::new(&self.class, &self.name, &self.proto)
    }

    /// Build the code item, encoding the handler groups the way a DEX file
    /// would store them.
    pub fn code_item(&self) -> Result<CodeItem, String> {
        let mut b = CodeItemBuilder::new();
        b.registers(self.registers, 0, 0).insns(&self.insns);
        for (i, t) in self.tries.iter().enumerate() {
            let mut handlers: Vec<CatchHandler> = t
                .handlers
                .iter()
                .map(|h| CatchHandler {
                    type_idx: Some(h.type_idx),
                    address: h.addr,
                })
                .collect();
            if let Some(address) = t.catch_all {
                handlers.push(CatchHandler {
                    type_idx: None,
                    address,
                });
            }
            if handlers.is_empty() {
                return Err(format!("try #{i} has no handlers"));
            }
            let group = b.handler_group(&handlers);
            b.try_range(t.start, t.count, group);
        }
        Ok(b.build())
    }
}
