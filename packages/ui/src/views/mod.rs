mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login_view;
pub use login_view::LoginView;

mod dashboard_view;
pub use dashboard_view::DashboardView;
