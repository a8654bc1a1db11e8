//! State and request logic behind the add/edit group dialog.
//!
//! The dialog component keeps a [`GroupForm`] in a signal and hands it to
//! [`load_group`], [`submit_form`] and [`dismiss`] through [`FormCell`]. Every
//! request started by the form carries a [`Ticket`]; a completion whose ticket
//! no longer matches (the selection changed, or the dialog was reset) is
//! dropped instead of being written into the new state.

use console_shared::{AddGroupRequest, ApiError, Group, GroupId, GroupStatus, UpdateGroupRequest};

use crate::api_client::GroupService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(GroupId),
}

/// Identifies the selection a request was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Which request a submission resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(AddGroupRequest),
    Update {
        name: String,
        body: UpdateGroupRequest,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub ticket: Ticket,
    pub request: SaveRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The save went through; the parent should close and refresh.
    Saved,
    /// The save failed and the error is shown in the dialog.
    Failed,
    /// The completion belonged to an earlier selection.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupForm {
    mode: DialogMode,
    name: String,
    status: Option<GroupStatus>,
    members: Vec<String>,
    saving: bool,
    loading: bool,
    fetched: bool,
    error: Option<String>,
    generation: u64,
}

impl GroupForm {
    pub fn new(selected: Option<GroupId>) -> Self {
        let mut form = Self {
            mode: DialogMode::Create,
            name: String::new(),
            status: None,
            members: Vec::new(),
            saving: false,
            loading: false,
            fetched: false,
            error: None,
            generation: 0,
        };
        form.reset(selected);
        form
    }

    /// Re-initialise for a new selection.
    ///
    /// Create mode starts from an empty form. Edit mode starts in the loading
    /// state and returns the ticket the caller should fetch the group with.
    pub fn reset(&mut self, selected: Option<GroupId>) -> Option<Ticket> {
        self.generation += 1;
        self.name.clear();
        self.status = None;
        self.members.clear();
        self.saving = false;
        self.fetched = false;
        self.error = None;

        match selected {
            Some(id) => {
                self.mode = DialogMode::Edit(id);
                self.loading = true;
                Some(Ticket(self.generation))
            }
            None => {
                self.mode = DialogMode::Create;
                self.loading = false;
                None
            }
        }
    }

    /// Follow the dialog's `open` / `selected_group` inputs.
    ///
    /// Closing resets to an empty create form so late completions from the
    /// previous session are dropped. Returns the fetch to start, if any.
    pub fn sync(&mut self, open: bool, selected: Option<GroupId>) -> Option<(GroupId, Ticket)> {
        if !open {
            self.reset(None);
            return None;
        }
        let ticket = self.reset(selected.clone())?;
        selected.map(|id| (id, ticket))
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, DialogMode::Edit(_))
    }

    pub fn title(&self) -> String {
        match self.mode {
            DialogMode::Create => "Add Group".to_string(),
            DialogMode::Edit(_) => format!("Group Edit - {}", self.name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Option<GroupStatus> {
        self.status
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The name is only editable while creating; a group's name is its identity.
    pub fn name_editable(&self) -> bool {
        !self.is_edit()
    }

    /// The server assigns the status of new groups.
    pub fn status_editable(&self) -> bool {
        self.is_edit()
    }

    /// Edit mode only becomes submittable once the group has been fetched.
    pub fn can_submit(&self) -> bool {
        !self.saving && !self.loading && (!self.is_edit() || self.fetched)
    }

    /// A failed edit-mode fetch can be started again.
    pub fn can_retry_fetch(&self) -> bool {
        self.is_edit() && !self.loading && !self.fetched
    }

    /// The dialog stays up while a save is in flight.
    pub fn can_dismiss(&self) -> bool {
        !self.saving
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.name_editable() {
            self.name = name.into();
        }
    }

    pub fn set_status(&mut self, status: GroupStatus) {
        if self.status_editable() {
            self.status = Some(status);
        }
    }

    pub fn set_members(&mut self, members: Vec<String>) {
        self.members = members;
    }

    /// Store the result of the edit-mode fetch. Returns false if it was stale.
    pub fn apply_fetch(&mut self, ticket: Ticket, result: Result<Group, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(group) => {
                self.fetched = true;
                self.error = None;
                self.status = Some(group.status);
                self.name = group.name;
                self.members = group.members;
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
        true
    }

    /// Put a failed edit-mode fetch back in flight under the current ticket.
    pub fn retry_fetch(&mut self) -> Option<(GroupId, Ticket)> {
        if !self.can_retry_fetch() {
            return None;
        }
        let DialogMode::Edit(id) = &self.mode else {
            return None;
        };
        let id = id.clone();
        self.loading = true;
        self.error = None;
        Some((id, Ticket(self.generation)))
    }

    /// Mark the form as saving and build the request to send.
    ///
    /// Returns `None` while a save or the fetch is in flight, and in edit mode
    /// until the group has been fetched.
    pub fn begin_save(&mut self) -> Option<PendingSave> {
        if !self.can_submit() {
            return None;
        }

        let request = match &self.mode {
            DialogMode::Create => SaveRequest::Create(AddGroupRequest {
                group: self.name.clone(),
                members: self.members.clone(),
            }),
            DialogMode::Edit(id) => SaveRequest::Update {
                name: id.as_str().to_string(),
                body: UpdateGroupRequest {
                    group: self.name.clone(),
                    members: self.members.clone(),
                    status: self.status?,
                },
            },
        };
        self.saving = true;

        Some(PendingSave {
            ticket: Ticket(self.generation),
            request,
        })
    }

    pub fn finish_save(&mut self, ticket: Ticket, result: Result<(), ApiError>) -> SaveOutcome {
        if !self.is_current(ticket) {
            return SaveOutcome::Stale;
        }
        self.saving = false;
        match result {
            Ok(()) => {
                self.error = None;
                SaveOutcome::Saved
            }
            Err(err) => {
                self.error = Some(err.user_message());
                SaveOutcome::Failed
            }
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

/// Shared access to the form from event handlers and spawned tasks.
///
/// The component implements this for its `Signal<GroupForm>`. Borrows never
/// outlive `f`, so no borrow is held across an await.
pub trait FormCell {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut GroupForm) -> R) -> R;
}

/// Fetch the group being edited and store the result.
///
/// Returns false if the selection moved on before the response arrived.
pub async fn load_group<S, C>(service: &S, mut cell: C, id: GroupId, ticket: Ticket) -> bool
where
    S: GroupService + ?Sized,
    C: FormCell,
{
    crate::log_debug!("Loading group {}", id);
    let result = service.get_group(&id).await;
    if let Err(e) = &result {
        crate::log_error!("Failed to load group {}: {}", id, e);
    }
    cell.with_form(|form| form.apply_fetch(ticket, result))
}

/// Submit the form. `on_saved` runs once if the save succeeds.
///
/// Returns `None` when the form is not submittable and nothing was sent.
pub async fn submit_form<S, C>(
    service: &S,
    mut cell: C,
    on_saved: impl FnOnce(),
) -> Option<SaveOutcome>
where
    S: GroupService + ?Sized,
    C: FormCell,
{
    let pending = cell.with_form(GroupForm::begin_save)?;

    let result = send_save(service, &pending.request).await;
    if let Err(e) = &result {
        crate::log_error!("Failed to save group: {}", e);
    }
    let outcome = cell.with_form(|form| form.finish_save(pending.ticket, result));
    if outcome == SaveOutcome::Saved {
        crate::log_info!("Group saved");
        on_saved();
    }
    Some(outcome)
}

/// Close the dialog unless a save is in flight. Returns whether it closed.
pub fn dismiss<C: FormCell>(mut cell: C, on_close: impl FnOnce()) -> bool {
    if !cell.with_form(|form| form.can_dismiss()) {
        crate::log_debug!("Ignoring dismiss while saving");
        return false;
    }
    on_close();
    true
}

/// Send a pending save to the backend.
pub async fn send_save<S: GroupService + ?Sized>(
    service: &S,
    request: &SaveRequest,
) -> Result<(), ApiError> {
    match request {
        SaveRequest::Create(body) => service.add_group(body).await,
        SaveRequest::Update { name, body } => service.update_group(name, body).await,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get(String),
        Post(AddGroupRequest),
        Put(String, UpdateGroupRequest),
    }

    #[derive(Default)]
    struct RecordingService {
        calls: RefCell<Vec<Call>>,
        group: Option<Group>,
        fail_with: Option<ApiError>,
    }

    impl RecordingService {
        fn failing(err: ApiError) -> Self {
            Self {
                fail_with: Some(err),
                ..Default::default()
            }
        }

        fn with_group(group: Group) -> Self {
            Self {
                group: Some(group),
                ..Default::default()
            }
        }

        async fn outcome(&self) -> Result<(), ApiError> {
            // Behave like a real request: let other tasks run before answering.
            tokio::task::yield_now().await;
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl GroupService for RecordingService {
        async fn get_group(&self, id: &GroupId) -> Result<Group, ApiError> {
            self.calls.borrow_mut().push(Call::Get(id.to_string()));
            self.outcome().await?;
            self.group
                .clone()
                .ok_or_else(|| ApiError::Http { status: 404, body: String::new() })
        }

        async fn add_group(&self, request: &AddGroupRequest) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Post(request.clone()));
            self.outcome().await
        }

        async fn update_group(&self, name: &str, request: &UpdateGroupRequest) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Put(name.to_string(), request.clone()));
            self.outcome().await
        }
    }

    impl FormCell for &RefCell<GroupForm> {
        fn with_form<R>(&mut self, f: impl FnOnce(&mut GroupForm) -> R) -> R {
            f(&mut self.borrow_mut())
        }
    }

    fn ops_group() -> Group {
        Group {
            name: "ops".into(),
            status: GroupStatus::Enabled,
            members: vec!["alice".into(), "bob".into()],
        }
    }

    /// Open the dialog on `name` and run the fetch it asks for.
    async fn open_on(form: &RefCell<GroupForm>, service: &RecordingService, name: &str) {
        let (id, ticket) = form
            .borrow_mut()
            .sync(true, Some(name.into()))
            .expect("edit mode starts a fetch");
        assert!(load_group(service, form, id, ticket).await);
    }

    /// Submit and count how often the parent callback fired.
    async fn submit_counting(
        form: &RefCell<GroupForm>,
        service: &RecordingService,
    ) -> (Option<SaveOutcome>, usize) {
        let closed = Cell::new(0);
        let outcome = submit_form(service, form, || closed.set(closed.get() + 1)).await;
        (outcome, closed.get())
    }

    #[test]
    fn create_mode_title_and_editability() {
        let form = GroupForm::new(None);
        assert_eq!(form.title(), "Add Group");
        assert!(form.name_editable());
        assert!(!form.status_editable());
        assert!(form.can_submit());
    }

    #[test]
    fn edit_mode_starts_loading_and_locks_name() {
        let mut form = GroupForm::new(Some("ops".into()));
        assert!(form.is_loading());
        assert!(!form.can_submit());
        assert!(!form.name_editable());
        assert!(form.status_editable());

        form.set_name("renamed");
        assert_eq!(form.name(), "");
    }

    #[test]
    fn status_is_ignored_in_create_mode() {
        let mut form = GroupForm::new(None);
        form.set_status(GroupStatus::Disabled);
        assert_eq!(form.status(), None);
    }

    #[test]
    fn closed_dialog_starts_no_fetch() {
        let mut form = GroupForm::new(None);
        assert_eq!(form.sync(false, Some("ops".into())), None);
        assert!(!form.is_edit());
        assert_eq!(form.sync(true, None), None);
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn selecting_a_group_fetches_once_and_populates_fields() {
        let service = RecordingService::with_group(ops_group());
        let form = RefCell::new(GroupForm::new(None));

        open_on(&form, &service, "ops").await;

        assert_eq!(*service.calls.borrow(), vec![Call::Get("ops".into())]);
        let form = form.borrow();
        assert_eq!(form.name(), "ops");
        assert_eq!(form.status(), Some(GroupStatus::Enabled));
        assert_eq!(form.members(), ["alice".to_string(), "bob".to_string()]);
        assert_eq!(form.title(), "Group Edit - ops");
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn fetch_failure_sets_error_and_clears_loading() {
        let service = RecordingService::failing(ApiError::Network("offline".into()));
        let form = RefCell::new(GroupForm::new(None));

        open_on(&form, &service, "ops").await;

        let form = form.borrow();
        assert_eq!(form.error(), Some("Network error: offline"));
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_save_locked() {
        let service = RecordingService::failing(ApiError::Network("offline".into()));
        let form = RefCell::new(GroupForm::new(None));
        open_on(&form, &service, "ops").await;

        assert!(!form.borrow().can_submit());
        assert_eq!(form.borrow_mut().begin_save(), None);

        let (outcome, closed) = submit_counting(&form, &service).await;
        assert_eq!(outcome, None);
        assert_eq!(closed, 0);
        assert_eq!(*service.calls.borrow(), vec![Call::Get("ops".into())]);
    }

    #[tokio::test]
    async fn retry_after_failed_fetch_unlocks_save() {
        let form = RefCell::new(GroupForm::new(None));
        let offline = RecordingService::failing(ApiError::Network("offline".into()));
        open_on(&form, &offline, "ops").await;
        assert!(form.borrow().can_retry_fetch());

        let (id, ticket) = form.borrow_mut().retry_fetch().expect("retry is offered");
        assert_eq!(id.as_str(), "ops");
        assert!(form.borrow().is_loading());
        assert_eq!(form.borrow().error(), None);
        assert_eq!(form.borrow_mut().retry_fetch(), None);

        let online = RecordingService::with_group(ops_group());
        assert!(load_group(&online, &form, id, ticket).await);

        assert!(form.borrow().can_submit());
        assert!(!form.borrow().can_retry_fetch());
        let (outcome, closed) = submit_counting(&form, &online).await;
        assert_eq!(outcome, Some(SaveOutcome::Saved));
        assert_eq!(closed, 1);
    }

    #[tokio::test]
    async fn stale_fetch_is_dropped() {
        let service = RecordingService::with_group(ops_group());
        let form = RefCell::new(GroupForm::new(None));
        let (id, old) = form.borrow_mut().sync(true, Some("ops".into())).unwrap();
        form.borrow_mut().sync(true, Some("dev".into()));

        assert!(!load_group(&service, &form, id, old).await);
        let form = form.borrow();
        assert_eq!(form.name(), "");
        assert!(form.is_loading());
    }

    #[tokio::test]
    async fn create_submits_one_post() {
        let service = RecordingService::default();
        let form = RefCell::new(GroupForm::new(None));
        form.borrow_mut().set_name("readers");
        form.borrow_mut().set_members(vec!["carol".into()]);

        let (outcome, closed) = submit_counting(&form, &service).await;

        assert_eq!(outcome, Some(SaveOutcome::Saved));
        assert_eq!(closed, 1);
        assert_eq!(
            *service.calls.borrow(),
            vec![Call::Post(AddGroupRequest {
                group: "readers".into(),
                members: vec!["carol".into()],
            })]
        );
        assert_eq!(form.borrow().error(), None);
        assert!(!form.borrow().is_saving());
    }

    #[tokio::test]
    async fn edit_submits_one_put_with_status() {
        let service = RecordingService::with_group(ops_group());
        let form = RefCell::new(GroupForm::new(None));
        open_on(&form, &service, "ops").await;

        form.borrow_mut().set_status(GroupStatus::Disabled);
        let (_, closed) = submit_counting(&form, &service).await;

        assert_eq!(closed, 1);
        let calls = service.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1],
            Call::Put(
                "ops".into(),
                UpdateGroupRequest {
                    group: "ops".into(),
                    members: vec!["alice".into(), "bob".into()],
                    status: GroupStatus::Disabled,
                }
            )
        );
    }

    #[tokio::test]
    async fn status_toggle_leaves_members_alone() {
        let service = RecordingService::with_group(ops_group());
        let form = RefCell::new(GroupForm::new(None));
        open_on(&form, &service, "ops").await;

        let mut form = form.borrow_mut();
        form.set_status(GroupStatus::Disabled);
        form.set_status(GroupStatus::Enabled);
        form.set_status(GroupStatus::Disabled);
        let pending = form.begin_save().unwrap();

        match pending.request {
            SaveRequest::Update { body, .. } => {
                assert_eq!(body.status, GroupStatus::Disabled);
                assert_eq!(body.members, ops_group().members);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_save_keeps_dialog_open() {
        let err = ApiError::Http {
            status: 400,
            body: r#"{"code":400,"message":"invalid group name"}"#.into(),
        };
        let service = RecordingService::failing(err.clone());
        let form = RefCell::new(GroupForm::new(None));
        form.borrow_mut().set_name("bad name!");

        let (outcome, closed) = submit_counting(&form, &service).await;

        assert_eq!(outcome, Some(SaveOutcome::Failed));
        assert_eq!(closed, 0);
        let form = form.borrow();
        assert!(!form.is_saving());
        assert_eq!(form.error(), Some(err.user_message().as_str()));
        assert_eq!(form.error(), Some("invalid group name"));
    }

    #[tokio::test]
    async fn retry_after_failure_clears_error() {
        let form = RefCell::new(GroupForm::new(None));
        form.borrow_mut().set_name("readers");

        let failing = RecordingService::failing(ApiError::Network("timeout".into()));
        assert_eq!(submit_counting(&form, &failing).await.1, 0);
        assert!(form.borrow().error().is_some());

        let ok = RecordingService::default();
        assert_eq!(submit_counting(&form, &ok).await.1, 1);
        assert_eq!(form.borrow().error(), None);
    }

    #[tokio::test]
    async fn second_submit_while_saving_is_ignored() {
        let service = RecordingService::default();
        let form = RefCell::new(GroupForm::new(None));
        form.borrow_mut().set_name("readers");
        let closed = Cell::new(0);

        let (first, second) = tokio::join!(
            submit_form(&service, &form, || closed.set(closed.get() + 1)),
            submit_form(&service, &form, || closed.set(closed.get() + 1)),
        );

        assert_eq!(first, Some(SaveOutcome::Saved));
        assert_eq!(second, None);
        assert_eq!(closed.get(), 1);
        assert_eq!(service.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn dismiss_is_ignored_while_saving() {
        let service = RecordingService::default();
        let form = RefCell::new(GroupForm::new(None));
        form.borrow_mut().set_name("readers");
        let closed = Cell::new(0);

        // Polled after the save has started and before its response arrives.
        let dismiss_during_save = async {
            assert!(form.borrow().is_saving());
            dismiss(&form, || closed.set(closed.get() + 1))
        };
        let (outcome, dismissed) = tokio::join!(
            submit_form(&service, &form, || closed.set(closed.get() + 1)),
            dismiss_during_save,
        );

        assert!(!dismissed);
        assert_eq!(outcome, Some(SaveOutcome::Saved));
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn dismiss_closes_an_idle_dialog() {
        let form = RefCell::new(GroupForm::new(None));
        let closed = Cell::new(0);

        assert!(dismiss(&form, || closed.set(closed.get() + 1)));
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn save_completion_after_reset_is_stale() {
        let mut form = GroupForm::new(None);
        let pending = form.begin_save().unwrap();
        form.reset(None);

        assert_eq!(form.finish_save(pending.ticket, Ok(())), SaveOutcome::Stale);
        assert!(!form.is_saving());
    }

    #[test]
    fn clearing_the_selection_empties_the_form() {
        let mut form = GroupForm::new(None);
        let (_, ticket) = form.sync(true, Some("ops".into())).unwrap();
        form.apply_fetch(ticket, Ok(ops_group()));

        assert_eq!(form.sync(true, None), None);
        assert_eq!(form.name(), "");
        assert!(form.members().is_empty());
        assert_eq!(form.title(), "Add Group");
    }
}
