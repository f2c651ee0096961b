use super::state::RegistryState;
use crate::api::{Employee, EmployeeClient, EmployeeDraft};
use crate::event::{ApiEvent, Event, Operation};
use color_eyre::Result;
use std::future::Future;
use tokio::sync::mpsc;
use tracing::{error, info};

/// What the form should do after an API result was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
  None,
  /// Empty every field
  Clear,
  /// Pre-fill every field
  Fill(EmployeeDraft),
}

/// Dispatches requests for user actions and reconciles their results.
///
/// Requests run as spawned tasks and report back through the event
/// channel; state is only touched in `apply`, on the event loop.
pub struct Controller {
  client: EmployeeClient,
  tx: mpsc::UnboundedSender<Event>,
  state: RegistryState,
  pending_loads: usize,
  in_flight: usize,
}

impl Controller {
  pub fn new(client: EmployeeClient, tx: mpsc::UnboundedSender<Event>) -> Self {
    Self {
      client,
      tx,
      state: RegistryState::new(),
      pending_loads: 0,
      in_flight: 0,
    }
  }

  pub fn employees(&self) -> &[Employee] {
    self.state.employees()
  }

  pub fn editing(&self) -> Option<&Employee> {
    self.state.editing()
  }

  pub fn is_editing(&self) -> bool {
    self.state.is_editing()
  }

  /// A full load is pending
  pub fn is_loading(&self) -> bool {
    self.pending_loads > 0
  }

  /// Number of requests still waiting for a result
  pub fn in_flight(&self) -> usize {
    self.in_flight
  }

  /// Fetch the whole list, replacing the local copy when it arrives
  pub fn load_all(&mut self) {
    self.pending_loads += 1;
    let client = self.client.clone();
    self.spawn(Operation::Load, async move {
      client.list().await.map(ApiEvent::Loaded)
    });
  }

  /// Create or update depending on the editing state.
  ///
  /// Returns false without touching the network when a field is empty.
  pub fn submit(&mut self, draft: EmployeeDraft) -> bool {
    if !draft.is_complete() {
      return false;
    }

    let client = self.client.clone();
    match self.state.editing().map(|editing| editing.id.clone()) {
      Some(id) => {
        self.spawn(Operation::Submit, async move {
          let result = client.update(&id, &draft).await;
          result.map(|()| ApiEvent::Updated { id, draft })
        });
      }
      None => {
        self.spawn(Operation::Submit, async move {
          client.create(&draft).await.map(ApiEvent::Created)
        });
      }
    }
    true
  }

  pub fn delete(&mut self, id: &str) {
    let client = self.client.clone();
    let id = id.to_string();
    self.spawn(Operation::Delete, async move {
      let result = client.delete(&id).await;
      result.map(|()| ApiEvent::Deleted(id))
    });
  }

  /// Fetch a fresh copy of the record; editing starts when it arrives
  pub fn begin_edit(&mut self, id: &str) {
    let client = self.client.clone();
    let id = id.to_string();
    self.spawn(Operation::Fetch, async move {
      client.get(&id).await.map(ApiEvent::Fetched)
    });
  }

  /// Back to creating. Requests already sent still complete.
  pub fn cancel_edit(&mut self) -> FormAction {
    self.state.end_edit();
    FormAction::Clear
  }

  /// Reconcile local state with a request result
  pub fn apply(&mut self, event: ApiEvent) -> FormAction {
    self.in_flight = self.in_flight.saturating_sub(1);

    match event {
      ApiEvent::Loaded(employees) => {
        info!(count = employees.len(), "Employees loaded");
        self.pending_loads = self.pending_loads.saturating_sub(1);
        self.state.replace_all(employees);
        FormAction::None
      }
      ApiEvent::Created(employee) => {
        info!(id = %employee.id, "Employee created");
        self.state.append(employee);
        FormAction::Clear
      }
      ApiEvent::Updated { id, draft } => {
        info!(%id, "Employee updated");
        self.state.apply_update(&id, &draft);
        self.state.end_edit();
        FormAction::Clear
      }
      ApiEvent::Deleted(id) => {
        info!(%id, "Employee deleted");
        self.state.remove(&id);
        FormAction::None
      }
      ApiEvent::Fetched(employee) => {
        let draft = employee.draft();
        self.state.begin_edit(employee);
        FormAction::Fill(draft)
      }
      ApiEvent::Failed(operation) => {
        if operation == Operation::Load {
          self.pending_loads = self.pending_loads.saturating_sub(1);
        }
        FormAction::None
      }
    }
  }

  /// Run a request in the background, logging failures at the call site
  fn spawn<F>(&mut self, operation: Operation, request: F)
  where
    F: Future<Output = Result<ApiEvent>> + Send + 'static,
  {
    self.in_flight += 1;
    let tx = self.tx.clone();

    tokio::spawn(async move {
      let event = match request.await {
        Ok(event) => event,
        Err(e) => {
          error!(error = %e, "{}", operation.failure_message());
          ApiEvent::Failed(operation)
        }
      };
      // Receiver is gone only when the app is shutting down
      let _ = tx.send(Event::Api(event));
    });
  }
}
