//! Dashboard Controller
//!
//! Owns the dashboard state and is the only thing that mutates it. Fetches
//! run as tokio tasks so callers stay responsive; a newer request for the
//! same data aborts the older task, and a response is applied only if its
//! ticket is still current.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::snapshot::DashboardSnapshot;
use crate::client::{AnalyticsApi, FetchError, FetchSlot, RequestTracker};
use crate::query::{Filter, SkillsQuery};
use crate::view::{DashboardOptions, FetchStrategy, Tab};

/// State plus the tracker that decides which responses may touch it
#[derive(Debug)]
struct Inner {
    snapshot: DashboardSnapshot,
    tracker: RequestTracker,
}

impl Inner {
    /// Log a failure and keep whatever data is already shown
    fn record_failure(&mut self, error: FetchError) {
        if error.is_cancelled() {
            return;
        }
        tracing::warn!(
            endpoint = ?error.endpoint(),
            error = %error,
            "Fetch failed, keeping previously loaded data"
        );
        self.snapshot.last_error = Some(error);
    }
}

/// Cancellation-aware owner of one dashboard's state
pub struct DashboardController<A: AnalyticsApi + 'static> {
    api: Arc<A>,
    options: DashboardOptions,
    inner: Arc<RwLock<Inner>>,
    tasks: Mutex<HashMap<FetchSlot, JoinHandle<()>>>,
}

impl<A: AnalyticsApi + 'static> DashboardController<A> {
    /// Create a controller; nothing is fetched until [`load`](Self::load)
    pub fn new(api: Arc<A>, options: DashboardOptions) -> Self {
        Self::with_filter(api, options, Filter::default())
    }

    /// Create a controller whose first load already uses `filter`
    pub fn with_filter(api: Arc<A>, options: DashboardOptions, filter: Filter) -> Self {
        let snapshot = DashboardSnapshot {
            filter,
            ..DashboardSnapshot::default()
        };

        Self {
            api,
            options,
            inner: Arc::new(RwLock::new(Inner {
                snapshot,
                tracker: RequestTracker::new(),
            })),
            tasks: Mutex::new(HashMap::new()),
        }
    }

    pub fn options(&self) -> DashboardOptions {
        self.options
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.inner.read().await.snapshot.clone()
    }

    /// Initial load, the equivalent of mounting the dashboard
    pub async fn load(&self) {
        let mut inner = self.inner.write().await;
        let filter = inner.snapshot.filter.clone();

        match self.options.fetch_strategy {
            FetchStrategy::Combined => self.spawn_combined(&mut inner, filter),
            FetchStrategy::Independent => {
                self.spawn_skills(&mut inner, filter);
                self.spawn_trends(&mut inner);
            }
        }

        self.spawn_momentum(&mut inner);
    }

    /// Replace the filter; returns false (and fetches nothing) if the
    /// new filter would produce the same request
    pub async fn set_filter(&self, filter: Filter) -> bool {
        self.update_filter(|_| filter).await
    }

    /// Change only the job title
    pub async fn set_job_title(&self, job_title: impl Into<String>) -> bool {
        let job_title = job_title.into();
        self.update_filter(|current| current.clone().with_job_title(job_title))
            .await
    }

    /// Change only the country
    pub async fn set_country(&self, country: impl Into<String>) -> bool {
        let country = country.into();
        self.update_filter(|current| current.clone().with_country(country))
            .await
    }

    pub async fn select_tab(&self, tab: Tab) {
        self.inner.write().await.snapshot.view.select_tab(tab);
    }

    pub async fn toggle_menu(&self) {
        self.inner.write().await.snapshot.view.toggle_menu();
    }

    pub async fn set_menu_open(&self, open: bool) {
        self.inner.write().await.snapshot.view.set_menu_open(open);
    }

    /// Viewport resized; returns true when the layout mode flipped
    pub async fn resize(&self, width: f64) -> bool {
        self.inner.write().await.snapshot.view.resize(width)
    }

    /// Wait until no fetch is outstanding
    pub async fn settle(&self) {
        loop {
            let handles: Vec<_> = {
                let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
                tasks.drain().map(|(_, handle)| handle).collect()
            };

            if handles.is_empty() {
                break;
            }

            for handle in handles {
                if let Err(e) = handle.await {
                    if !e.is_cancelled() {
                        tracing::error!(error = %e, "Fetch task panicked");
                    }
                }
            }
        }
    }

    /// Abort everything in flight, the equivalent of unmounting
    pub async fn shutdown(&self) {
        let mut inner = self.inner.write().await;
        inner.tracker.cancel_all();
        self.abort_all();
        inner.snapshot.view.set_loading(false);

        tracing::debug!("Dashboard controller shut down");
    }

    /// Filter update, ticket issue and task swap under one write guard
    async fn update_filter(&self, update: impl FnOnce(&Filter) -> Filter) -> bool {
        let mut inner = self.inner.write().await;

        let filter = update(&inner.snapshot.filter);
        if !inner.snapshot.filter.differs_from(&filter) {
            return false;
        }
        inner.snapshot.filter = filter.clone();

        tracing::info!(
            job_title = ?filter.job_title(),
            country = ?filter.country(),
            "Filter changed"
        );

        match self.options.fetch_strategy {
            FetchStrategy::Combined => self.spawn_combined(&mut inner, filter),
            FetchStrategy::Independent => self.spawn_skills(&mut inner, filter),
        }

        true
    }

    /// Skills and trends as one pair: both apply or neither does
    fn spawn_combined(&self, guard: &mut Inner, filter: Filter) {
        guard.snapshot.view.set_loading(true);
        let skills_ticket = guard.tracker.issue(FetchSlot::Skills);
        let trends_ticket = guard.tracker.issue(FetchSlot::Trends);

        let api = Arc::clone(&self.api);
        let inner = Arc::clone(&self.inner);

        let handle = tokio::spawn(async move {
            let query = SkillsQuery::new(filter);
            let result =
                futures_util::future::try_join(api.top_skills(&query), api.skill_trends()).await;

            let mut inner = inner.write().await;
            if !inner.tracker.is_current(skills_ticket) || !inner.tracker.is_current(trends_ticket)
            {
                tracing::debug!("Discarding superseded combined load");
                return;
            }

            match result {
                Ok((skills, trends)) => {
                    tracing::info!(
                        skills = skills.results.len(),
                        total_jobs = skills.total_jobs,
                        trend_points = trends.len(),
                        "Dashboard data loaded"
                    );
                    inner.snapshot.skills = skills.results;
                    inner.snapshot.total_jobs = skills.total_jobs;
                    inner.snapshot.trends = trends;
                    inner.snapshot.last_error = None;
                }
                Err(e) => inner.record_failure(e),
            }

            inner.snapshot.view.set_loading(false);
        });

        // A pair supersedes any standalone trends request as well
        self.abort_task(FetchSlot::Trends);
        self.replace_task(FetchSlot::Skills, handle);
    }

    fn spawn_skills(&self, guard: &mut Inner, filter: Filter) {
        let ticket = guard.tracker.issue(FetchSlot::Skills);
        let api = Arc::clone(&self.api);
        let inner = Arc::clone(&self.inner);

        let handle = tokio::spawn(async move {
            let query = SkillsQuery::new(filter);
            let result = api.top_skills(&query).await;

            let mut inner = inner.write().await;
            if !inner.tracker.is_current(ticket) {
                tracing::debug!(generation = ticket.generation, "Discarding superseded skills response");
                return;
            }

            match result {
                Ok(response) => {
                    tracing::info!(
                        skills = response.results.len(),
                        total_jobs = response.total_jobs,
                        "Top skills loaded"
                    );
                    inner.snapshot.skills = response.results;
                    inner.snapshot.total_jobs = response.total_jobs;
                    inner.snapshot.last_error = None;
                }
                Err(e) => inner.record_failure(e),
            }
        });

        self.replace_task(FetchSlot::Skills, handle);
    }

    fn spawn_trends(&self, guard: &mut Inner) {
        let ticket = guard.tracker.issue(FetchSlot::Trends);
        let api = Arc::clone(&self.api);
        let inner = Arc::clone(&self.inner);

        let handle = tokio::spawn(async move {
            let result = api.skill_trends().await;

            let mut inner = inner.write().await;
            if !inner.tracker.is_current(ticket) {
                return;
            }

            match result {
                Ok(trends) => {
                    tracing::info!(trend_points = trends.len(), "Skill trends loaded");
                    inner.snapshot.trends = trends;
                    inner.snapshot.last_error = None;
                }
                Err(e) => inner.record_failure(e),
            }
        });

        self.replace_task(FetchSlot::Trends, handle);
    }

    fn spawn_momentum(&self, guard: &mut Inner) {
        let ticket = guard.tracker.issue(FetchSlot::Momentum);
        let api = Arc::clone(&self.api);
        let inner = Arc::clone(&self.inner);

        let handle = tokio::spawn(async move {
            let result = api.momentum().await;

            let mut inner = inner.write().await;
            if !inner.tracker.is_current(ticket) {
                return;
            }

            match result {
                Ok(momentum) => {
                    tracing::info!(entries = momentum.len(), "Market momentum loaded");
                    inner.snapshot.momentum = momentum;
                }
                Err(e) => inner.record_failure(e),
            }
        });

        self.replace_task(FetchSlot::Momentum, handle);
    }

    fn replace_task(&self, slot: FetchSlot, handle: JoinHandle<()>) {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = tasks.insert(slot, handle) {
            previous.abort();
        }
    }

    fn abort_task(&self, slot: FetchSlot) {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = tasks.remove(&slot) {
            previous.abort();
        }
    }

    fn abort_all(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, handle) in tasks.drain() {
            handle.abort();
        }
    }
}

impl<A: AnalyticsApi + 'static> Drop for DashboardController<A> {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{MomentumEntry, SkillResult, TopSkillsResponse, TrendPoint};
    use crate::client::FetchResult;
    use crate::query::Endpoint;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    /// In-memory API that records every request
    #[derive(Default)]
    struct MockApi {
        skills_calls: Mutex<Vec<SkillsQuery>>,
        trends_calls: AtomicUsize,
        momentum_calls: AtomicUsize,
        fail_skills: AtomicBool,
        fail_trends: AtomicBool,
        /// Response delay per job title, in milliseconds
        delays: Mutex<HashMap<String, u64>>,
        trends_delay_ms: AtomicUsize,
    }

    impl MockApi {
        fn skills_queries(&self) -> Vec<SkillsQuery> {
            self.skills_calls.lock().unwrap().clone()
        }

        fn delay_for(&self, job_title: &str, ms: u64) {
            self.delays.lock().unwrap().insert(job_title.to_string(), ms);
        }
    }

    #[async_trait::async_trait]
    impl AnalyticsApi for MockApi {
        async fn top_skills(&self, query: &SkillsQuery) -> FetchResult<TopSkillsResponse> {
            self.skills_calls.lock().unwrap().push(query.clone());

            let job_title = query.filter.job_title().unwrap_or("all").to_string();
            let delay = self.delays.lock().unwrap().get(&job_title).copied().unwrap_or(10);
            tokio::time::sleep(Duration::from_millis(delay)).await;

            if self.fail_skills.load(Ordering::SeqCst) {
                return Err(FetchError::Status {
                    endpoint: Endpoint::TopSkills,
                    status: 500,
                });
            }

            Ok(TopSkillsResponse {
                results: vec![
                    SkillResult::new(format!("top-for-{}", job_title), 55.0).salary(120_000.0),
                    SkillResult::new("excel", 30.0).salary(70_000.0),
                ],
                total_jobs: 1000,
            })
        }

        async fn skill_trends(&self) -> FetchResult<Vec<TrendPoint>> {
            self.trends_calls.fetch_add(1, Ordering::SeqCst);
            let delay = self.trends_delay_ms.load(Ordering::SeqCst).max(10) as u64;
            tokio::time::sleep(Duration::from_millis(delay)).await;

            if self.fail_trends.load(Ordering::SeqCst) {
                return Err(FetchError::Network {
                    endpoint: Endpoint::SkillTrends,
                    message: "connection reset".to_string(),
                });
            }

            Ok(vec![
                TrendPoint::new("2023-01", 100.0, 120.0, 40.0),
                TrendPoint::new("2023-02", 110.0, 118.0, 45.0),
            ])
        }

        async fn momentum(&self) -> FetchResult<Vec<MomentumEntry>> {
            self.momentum_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![MomentumEntry {
                skill_name: "python".to_string(),
                current_count: 1200,
                previous_count: 1000,
                change_percent: 20.0,
            }])
        }
    }

    fn controller(options: DashboardOptions) -> (Arc<MockApi>, DashboardController<MockApi>) {
        let api = Arc::new(MockApi::default());
        let controller = DashboardController::new(Arc::clone(&api), options);
        (api, controller)
    }

    #[tokio::test(start_paused = true)]
    async fn test_combined_load_applies_both() {
        let (api, controller) = controller(DashboardOptions::combined());

        let before = controller.snapshot().await;
        assert!(before.is_empty());

        controller.load().await;
        assert!(controller.snapshot().await.view.is_loading);

        controller.settle().await;
        let snapshot = controller.snapshot().await;

        assert_eq!(snapshot.skills.len(), 2);
        assert_eq!(snapshot.trends.len(), 2);
        assert_eq!(snapshot.momentum.len(), 1);
        assert_eq!(snapshot.total_jobs, 1000);
        assert!(!snapshot.view.is_loading);
        assert!(snapshot.last_error.is_none());
        assert_eq!(snapshot.summary().top_skill, "top-for-all");
        assert_eq!(snapshot.summary().peak_salary_label(), "$120k");

        assert_eq!(api.skills_queries().len(), 1);
        assert_eq!(api.trends_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.momentum_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_change_issues_exactly_one_request() {
        let (api, controller) = controller(DashboardOptions::independent());
        controller.load().await;
        controller.settle().await;
        assert_eq!(api.skills_queries().len(), 1);

        assert!(controller.set_job_title("Data Analyst").await);
        controller.settle().await;
        let queries = api.skills_queries();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].filter.job_title(), Some("Data Analyst"));
        assert_eq!(queries[1].filter.country(), None);

        // Same value again: no request
        assert!(!controller.set_job_title("Data Analyst").await);
        controller.settle().await;
        assert_eq!(api.skills_queries().len(), 2);

        assert!(controller.set_country("India").await);
        controller.settle().await;
        let queries = api.skills_queries();
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[2].filter.job_title(), Some("Data Analyst"));
        assert_eq!(queries[2].filter.country(), Some("India"));

        assert!(controller.set_job_title("").await);
        controller.settle().await;
        let queries = api.skills_queries();
        assert_eq!(queries.len(), 4);
        assert_eq!(queries[3].filter.job_title(), None);

        // Trends are fixed in the independent variant
        assert_eq!(api.trends_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_filter_used_by_first_load() {
        let api = Arc::new(MockApi::default());
        let filter = Filter::default().with_country("United States");
        let controller =
            DashboardController::with_filter(Arc::clone(&api), DashboardOptions::combined(), filter);

        controller.load().await;
        controller.settle().await;

        let queries = api.skills_queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].filter.country(), Some("United States"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_switch_never_fetches_and_closes_menu() {
        let (api, controller) = controller(DashboardOptions::combined());
        controller.load().await;
        controller.settle().await;

        controller.set_menu_open(true).await;
        controller.select_tab(Tab::Skills).await;
        controller.settle().await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.view.active_tab, Tab::Skills);
        assert!(!snapshot.view.mobile_menu_open);
        assert_eq!(api.skills_queries().len(), 1);
        assert_eq!(api.trends_calls.load(Ordering::SeqCst), 1);

        controller.toggle_menu().await;
        assert!(controller.snapshot().await.view.mobile_menu_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_keeps_data() {
        let (api, controller) = controller(DashboardOptions::combined());
        controller.load().await;
        controller.settle().await;
        let before = controller.snapshot().await;

        assert!(controller.resize(375.0).await);
        let after = controller.snapshot().await;

        assert!(after.view.is_mobile);
        assert_eq!(after.skills, before.skills);
        assert_eq!(after.trends, before.trends);
        assert_eq!(api.skills_queries().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_previous_data() {
        let (api, controller) = controller(DashboardOptions::independent());
        controller.load().await;
        controller.settle().await;
        let before = controller.snapshot().await;

        api.fail_skills.store(true, Ordering::SeqCst);
        assert!(controller.set_country("India").await);
        controller.settle().await;

        let after = controller.snapshot().await;
        assert_eq!(after.skills, before.skills);
        assert_eq!(after.total_jobs, before.total_jobs);
        assert!(matches!(
            after.last_error,
            Some(FetchError::Status { status: 500, .. })
        ));

        // Next success clears the error
        api.fail_skills.store(false, Ordering::SeqCst);
        controller.set_country("").await;
        controller.settle().await;
        assert!(controller.snapshot().await.last_error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_request_never_overwrites() {
        let (api, controller) = controller(DashboardOptions::independent());
        api.delay_for("Data Analyst", 500);
        api.delay_for("Data Scientist", 10);

        controller.set_job_title("Data Analyst").await;
        controller.set_job_title("Data Scientist").await;
        controller.settle().await;

        // Let the slow response's timer elapse too
        tokio::time::sleep(Duration::from_secs(1)).await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.summary().top_skill, "top-for-Data Scientist");
        assert_eq!(snapshot.filter.job_title(), Some("Data Scientist"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_filter_changes_apply_the_final_filter() {
        for _ in 0..50 {
            let (api, controller) = controller(DashboardOptions::independent());
            let controller = Arc::new(controller);

            // Both callers queue up behind the same guard
            let guard = controller.inner.read().await;
            let analyst = tokio::spawn({
                let controller = Arc::clone(&controller);
                async move { controller.set_job_title("Data Analyst").await }
            });
            let scientist = tokio::spawn({
                let controller = Arc::clone(&controller);
                async move { controller.set_job_title("Data Scientist").await }
            });
            tokio::time::sleep(Duration::from_millis(5)).await;
            drop(guard);

            assert!(analyst.await.unwrap());
            assert!(scientist.await.unwrap());
            controller.settle().await;

            let snapshot = controller.snapshot().await;
            let job_title = snapshot.filter.job_title().unwrap().to_string();
            assert_eq!(snapshot.summary().top_skill, format!("top-for-{}", job_title));
            assert_eq!(api.skills_queries().len(), 2);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_combined_filter_change_supersedes_pair() {
        let (api, controller) = controller(DashboardOptions::combined());
        api.delay_for("all", 500);

        controller.load().await;
        controller.set_job_title("Data Scientist").await;
        controller.settle().await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.summary().top_skill, "top-for-Data Scientist");
        assert_eq!(snapshot.trends.len(), 2);
        assert!(!snapshot.view.is_loading);
        assert_eq!(api.skills_queries().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_combined_failure_applies_neither_half() {
        let (api, controller) = controller(DashboardOptions::combined());
        api.fail_trends.store(true, Ordering::SeqCst);

        controller.load().await;
        controller.settle().await;

        let snapshot = controller.snapshot().await;
        assert!(snapshot.skills.is_empty());
        assert!(snapshot.trends.is_empty());
        assert!(!snapshot.view.is_loading);
        assert!(matches!(snapshot.last_error, Some(FetchError::Network { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_trends_failure_does_not_block_skills() {
        let (api, controller) = controller(DashboardOptions::independent());
        api.fail_trends.store(true, Ordering::SeqCst);

        controller.load().await;
        controller.settle().await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.skills.len(), 2);
        assert!(snapshot.trends.is_empty());
        assert!(!snapshot.view.is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_aborts_in_flight_requests() {
        let (api, controller) = controller(DashboardOptions::combined());
        api.delay_for("all", 5_000);

        controller.load().await;
        controller.shutdown().await;
        tokio::time::sleep(Duration::from_secs(10)).await;
        controller.settle().await;

        let snapshot = controller.snapshot().await;
        assert!(snapshot.skills.is_empty());
        assert!(!snapshot.view.is_loading);
    }
}
