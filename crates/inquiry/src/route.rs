use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum::{AsRefStr, Display};

use crate::draft::InquiryDraft;
use crate::types::{InquiryTarget, TargetKind};

/// Body shape a backend endpoint expects. The three variants mirror the
/// contracts observed in production; `InquiryFlat` is the unified default,
/// the other two exist so a deployment pinned to a legacy backend can keep
/// talking to it from configuration alone.
#[derive(
    Display, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WireContract {
    /// `{<kindId>, name, email, phone, subject, message}`
    #[default]
    InquiryFlat,
    /// `{equipmentId, inquiryData: {name, email, phone, message}}`
    ContactNested,
    /// `{freelancerId, senderInfo: {name, email}, subject, message}`
    ContactSender,
}

impl WireContract {
    /// Key carrying the listing id at the top level of the body.
    fn id_key(&self, kind: TargetKind) -> &'static str {
        match (self, kind) {
            // The legacy freelancer contact endpoint predates the
            // manpower naming.
            (Self::ContactSender, TargetKind::Manpower) => "freelancerId",
            _ => kind.id_field(),
        }
    }

    /// Build the request body for a validated draft.
    pub fn body(&self, draft: &InquiryDraft, target: &InquiryTarget) -> Value {
        let mut body = Map::new();
        body.insert(
            self.id_key(target.kind).to_string(),
            Value::String(target.id.clone()),
        );

        match self {
            Self::InquiryFlat => {
                body.insert("name".to_string(), Value::String(draft.sender_name.clone()));
                body.insert(
                    "email".to_string(),
                    Value::String(draft.sender_email.clone()),
                );
                body.insert(
                    "phone".to_string(),
                    Value::String(draft.sender_phone.clone()),
                );
                body.insert("subject".to_string(), Value::String(draft.subject.clone()));
                body.insert("message".to_string(), Value::String(draft.message.clone()));
            }
            Self::ContactNested => {
                body.insert(
                    "inquiryData".to_string(),
                    json!({
                        "name": draft.sender_name,
                        "email": draft.sender_email,
                        "phone": draft.sender_phone,
                        "message": draft.message,
                    }),
                );
            }
            Self::ContactSender => {
                body.insert(
                    "senderInfo".to_string(),
                    json!({
                        "name": draft.sender_name,
                        "email": draft.sender_email,
                    }),
                );
                body.insert("subject".to_string(), Value::String(draft.subject.clone()));
                body.insert("message".to_string(), Value::String(draft.message.clone()));
            }
        }

        Value::Object(body)
    }
}

/// Endpoint path plus the body shape it expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    #[serde(default)]
    pub contract: WireContract,
}

impl Route {
    pub fn new(path: impl Into<String>, contract: WireContract) -> Self {
        Self {
            path: path.into(),
            contract,
        }
    }
}

/// Per-kind routing. One table per client instance, never hardcoded at a
/// call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default = "default_manpower_route")]
    pub manpower: Route,
    #[serde(default = "default_equipment_route")]
    pub equipment: Route,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            manpower: default_manpower_route(),
            equipment: default_equipment_route(),
        }
    }
}

impl RouteTable {
    pub fn route_for(&self, kind: TargetKind) -> &Route {
        match kind {
            TargetKind::Manpower => &self.manpower,
            TargetKind::Equipment => &self.equipment,
        }
    }
}

fn default_manpower_route() -> Route {
    Route::new("/api/inquiry/manpower", WireContract::InquiryFlat)
}

fn default_equipment_route() -> Route {
    Route::new("/api/inquiry/equipment", WireContract::InquiryFlat)
}
