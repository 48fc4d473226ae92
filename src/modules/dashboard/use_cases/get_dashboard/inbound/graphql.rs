use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::dashboard::core::snapshot::{Activity, ActivityKind, DashboardSnapshot};
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlActivityKind {
    Project,
    Task,
    Invoice,
}

impl From<ActivityKind> for GqlActivityKind {
    fn from(v: ActivityKind) -> Self {
        match v {
            ActivityKind::Project => Self::Project,
            ActivityKind::Task => Self::Task,
            ActivityKind::Invoice => Self::Invoice,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub id: i32,
    pub kind: GqlActivityKind,
    pub title: String,
    pub client: String,
    pub time: String,
}

impl From<Activity> for GqlActivity {
    fn from(v: Activity) -> Self {
        Self {
            id: v.id as i32,
            kind: v.kind.into(),
            title: v.title,
            client: v.client,
            time: v.time.to_string(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDashboard {
    pub total_clients: i32,
    pub active_projects: i32,
    pub pending_tasks: i32,
    pub completed_tasks: i32,
    pub overdue_items: i32,
    /// Decimal amount rendered as text, e.g. "1250.00".
    pub monthly_revenue: String,
    pub recent_activity: Vec<GqlActivity>,
}

impl From<DashboardSnapshot> for GqlDashboard {
    fn from(v: DashboardSnapshot) -> Self {
        Self {
            total_clients: v.total_clients as i32,
            active_projects: v.active_projects as i32,
            pending_tasks: v.pending_tasks as i32,
            completed_tasks: v.completed_tasks as i32,
            overdue_items: v.overdue_items as i32,
            monthly_revenue: v.monthly_revenue.to_string(),
            recent_activity: v.recent_activity.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct DashboardQuery;

#[Object]
impl DashboardQuery {
    async fn dashboard(&self, context: &Context<'_>) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.dashboard.get_dashboard().await.into())
    }
}
