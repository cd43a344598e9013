use crate::http::Response;
use crate::instance::{InstanceAction, InstanceError, InstanceView};

use super::VultrInstance;

const CREATE_ACCEPTED: u16 = 202;
const NOT_FOUND: u16 = 404;
const OK: u16 = 200;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Power {
    Reboot,
    Start,
    Halt,
}

impl Power {
    const fn operation(self) -> &'static str {
        match self {
            Self::Reboot => "reboot",
            Self::Start => "start",
            Self::Halt => "halt",
        }
    }
}

fn ensure_success(operation: &'static str, response: Response) -> Result<Response, InstanceError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(InstanceError::Rejected {
            operation,
            status: response.status,
            body: response.body,
        })
    }
}

impl VultrInstance {
    pub(crate) async fn provision(&mut self) -> Result<InstanceView, InstanceError> {
        let Some(payload) = self.payload.as_ref() else {
            return Err(InstanceError::Protocol(String::from(
                "instance was not prepared with a create payload",
            )));
        };
        let response = self.api.create_instance(payload).await?;
        if response.status != CREATE_ACCEPTED {
            return Err(InstanceError::CreateFailed {
                status: response.status,
                body: response.body,
            });
        }
        let view = InstanceView::from_body(&response.body)?;
        tracing::info!(
            instance_id = view.id(),
            status = view.status(),
            "instance created"
        );
        self.record(view.clone());
        Ok(view)
    }

    pub(super) async fn refresh(&mut self) -> Result<Option<InstanceView>, InstanceError> {
        let id = self.require_id()?.to_owned();
        let response = self.api.get_instance(&id).await?;
        match response.status {
            OK => {
                let view = InstanceView::from_body(&response.body)?;
                self.record(view.clone());
                Ok(Some(view))
            }
            NOT_FOUND => Ok(None),
            status => Err(InstanceError::Rejected {
                operation: "get",
                status,
                body: response.body,
            }),
        }
    }

    pub(super) async fn destroy(&self) -> Result<Option<String>, InstanceError> {
        let response = self.api.delete_instance(self.require_id()?).await?;
        if response.is_success() {
            tracing::info!(instance_id = self.require_id()?, "instance deleted");
            Ok(None)
        } else {
            Ok(Some(response.error_message()))
        }
    }

    pub(super) async fn power(&self, power: Power) -> Result<(), InstanceError> {
        let id = self.require_id()?;
        let response = match power {
            Power::Reboot => self.api.reboot_instance(id).await?,
            Power::Start => self.api.start_instance(id).await?,
            Power::Halt => self.api.halt_instance(id).await?,
        };
        ensure_success(power.operation(), response)?;
        Ok(())
    }

    pub(super) async fn run_action(&self, action: InstanceAction) -> Result<Response, InstanceError> {
        let id = self.require_id()?;
        let api = &self.api;
        let response = match &action {
            InstanceAction::Reinstall(payload) => api.reinstall_instance(id, payload).await?,
            InstanceAction::SetBackupSchedule(payload) => {
                api.set_backup_schedule(id, payload).await?
            }
            InstanceAction::GetBackupSchedule => api.get_backup_schedule(id).await?,
            InstanceAction::AttachIso(payload) => api.attach_iso(id, payload).await?,
            InstanceAction::DetachIso => api.detach_iso(id).await?,
            InstanceAction::IsoStatus => api.get_iso_status(id).await?,
            InstanceAction::Restore(payload) => api.restore_instance(id, payload).await?,
            InstanceAction::AttachVpc(payload) => api.attach_vpc(id, payload).await?,
            InstanceAction::DetachVpc(payload) => api.detach_vpc(id, payload).await?,
            InstanceAction::AttachVpc2(payload) => api.attach_vpc2(id, payload).await?,
            InstanceAction::DetachVpc2(payload) => api.detach_vpc2(id, payload).await?,
            InstanceAction::Bandwidth => api.get_instance_bandwidth(id).await?,
            InstanceAction::Neighbors => api.list_instance_neighbors(id).await?,
            InstanceAction::UserData => api.get_instance_user_data(id).await?,
            InstanceAction::Upgrades(kind) => api.get_instance_upgrades(id, kind.as_deref()).await?,
            InstanceAction::Update(payload) => api.update_instance(id, payload).await?,
        };
        ensure_success(action.name(), response)
    }
}
