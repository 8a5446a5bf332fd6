//! Application state and core logic

use crate::api::{OrderApi, OrderClient};
use crate::config::PizzaConfig;
use crate::state::{AppState, Form, OrderForm, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Order API client
    api: Box<dyn OrderApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &PizzaConfig) -> Self {
        let base_url = config.api_base_url();
        info!(%base_url, "using order API");
        Self::with_api(Box::new(OrderClient::new(base_url)), config.start_view())
    }

    /// Create an App with an explicit API client, starting at `view`
    pub fn with_api(api: Box<dyn OrderApi>, view: View) -> Self {
        Self {
            state: AppState::with_view(view),
            api,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Route shortcuts work from every view
        match key.code {
            KeyCode::F(1) => {
                self.navigate(View::Home);
                return Ok(());
            }
            KeyCode::F(2) => {
                self.navigate(View::Order);
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Order => self.handle_order_key(key).await,
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        self.leave_current_view();
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        debug!(path = view.path(), "navigated");
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.leave_current_view();
            self.state.current_view = view;
            debug!(path = view.path(), "navigated back");
        }
    }

    /// Form state only lives while the order view is shown
    fn leave_current_view(&mut self) {
        if self.state.current_view.is_form_view() {
            self.state.order_form = OrderForm::new();
        }
    }

    /// Handle keys on the landing page
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('o') | KeyCode::Enter => self.navigate(View::Order),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys on the order form
    async fn handle_order_key(&mut self, key: KeyEvent) {
        let on_submit = self.state.order_form.is_submit_active();
        let on_size = self.state.order_form.active_field_index == 1;
        let on_checkbox = self
            .state
            .order_form
            .current_field()
            .is_some_and(|f| f.is_checkbox());

        match key.code {
            // Submit shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_order().await;
            }
            KeyCode::Enter if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit_order().await;
            }
            KeyCode::Enter if on_submit => self.submit_order().await,
            KeyCode::Enter if on_checkbox => self.state.order_form.toggle_focused_topping(),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => self.state.order_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.order_form.prev_field(),
            KeyCode::Left if on_size => self.state.order_form.cycle_size(false),
            KeyCode::Right if on_size => self.state.order_form.cycle_size(true),
            KeyCode::Esc => self.go_back(),
            KeyCode::Char(c) => self.state.order_form.input_char(c),
            KeyCode::Backspace => self.state.order_form.backspace(),
            _ => {}
        }
    }

    /// Send the current values to the order API and record the outcome.
    /// Ignored while the form is invalid.
    pub async fn submit_order(&mut self) {
        if self.state.order_form.disabled {
            debug!("submit ignored: form is invalid");
            return;
        }

        let order = self.state.order_form.values.clone();
        info!(
            full_name = %order.full_name,
            size = %order.size,
            toppings = ?order.toppings,
            "submitting order"
        );

        let result = self.api.place_order(&order).await;
        match &result {
            Ok(receipt) => info!(message = %receipt.message, "order placed"),
            Err(err) => warn!(error = %err, "order failed"),
        }
        self.state.order_form.apply_submission(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockOrderApi};
    use crate::state::schema::FULL_NAME_TOO_SHORT;
    use crate::state::{FormValues, OrderReceipt, GENERIC_FAILURE};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(mock: MockOrderApi, view: View) -> App {
        App::with_api(Box::new(mock), view)
    }

    /// Mock that fails the test if an order is sent
    fn no_orders() -> MockOrderApi {
        let mut mock = MockOrderApi::new();
        mock.expect_place_order().never();
        mock
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    /// Fill name and size through the keyboard, leaving focus on the size select
    async fn fill_order(app: &mut App, name: &str, size: char) {
        type_str(app, name).await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Char(size))).await.unwrap();
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_at_requested_view() {
            let app = app_with(no_orders(), View::Order);
            assert_eq!(app.state.current_view, View::Order);
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_enter_on_home_opens_order_form() {
            let mut app = app_with(no_orders(), View::Home);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Order);
            assert_eq!(app.state.view_history, vec![View::Home]);
        }

        #[tokio::test]
        async fn test_function_keys_switch_routes() {
            let mut app = app_with(no_orders(), View::Home);
            app.handle_key(key(KeyCode::F(2))).await.unwrap();
            assert_eq!(app.state.current_view, View::Order);
            app.handle_key(key(KeyCode::F(1))).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[test]
        fn test_navigate_to_current_view_is_noop() {
            let mut app = app_with(no_orders(), View::Home);
            app.navigate(View::Home);
            assert!(app.state.view_history.is_empty());
        }

        #[tokio::test]
        async fn test_leaving_order_view_discards_form() {
            let mut app = app_with(no_orders(), View::Order);
            type_str(&mut app, "Al").await;
            assert_eq!(app.state.order_form.values.full_name, "Al");

            app.navigate(View::Home);
            app.navigate(View::Order);

            assert_eq!(app.state.order_form.values, FormValues::default());
            assert_eq!(app.state.order_form.errors.full_name, "");
            assert!(app.state.order_form.disabled);
        }

        #[tokio::test]
        async fn test_esc_goes_back() {
            let mut app = app_with(no_orders(), View::Home);
            app.navigate(View::Order);
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
            assert!(app.state.view_history.is_empty());
        }

        #[test]
        fn test_go_back_without_history_stays() {
            let mut app = app_with(no_orders(), View::Order);
            app.go_back();
            assert_eq!(app.state.current_view, View::Order);
        }

        #[test]
        fn test_q_quits_from_home() {
            let mut app = app_with(no_orders(), View::Home);
            tokio_test::block_on(app.handle_key(key(KeyCode::Char('q')))).unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_q_is_text_on_order_form() {
            let mut app = app_with(no_orders(), View::Order);
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(!app.should_quit());
            assert_eq!(app.state.order_form.values.full_name, "q");
        }
    }

    mod form_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_short_name_with_size_stays_disabled() {
            let mut app = app_with(no_orders(), View::Order);
            fill_order(&mut app, "Al", 'm').await;

            let form = &app.state.order_form;
            assert_eq!(form.values.size, "M");
            assert!(form.disabled);
            assert_eq!(form.errors.full_name, FULL_NAME_TOO_SHORT);
        }

        #[tokio::test]
        async fn test_arrow_keys_cycle_size() {
            let mut app = app_with(no_orders(), View::Order);
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.order_form.values.size, "M");
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(app.state.order_form.values.size, "S");
        }

        #[tokio::test]
        async fn test_arrows_ignored_off_size_field() {
            let mut app = app_with(no_orders(), View::Order);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.order_form.values.size, "");
        }

        #[tokio::test]
        async fn test_space_and_enter_toggle_toppings() {
            let mut app = app_with(no_orders(), View::Order);
            app.state.order_form.set_active_field(2); // Pepperoni
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(
                app.state.order_form.values.toppings,
                vec!["1".to_string(), "2".to_string()]
            );

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.order_form.values.toppings, vec!["1".to_string()]);
        }

        #[tokio::test]
        async fn test_enter_on_text_field_moves_focus() {
            let mut app = app_with(no_orders(), View::Order);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.order_form.active_field_index, 1);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_disabled_form_sends_nothing() {
            let mut app = app_with(no_orders(), View::Order);
            fill_order(&mut app, "Al", 'm').await;
            app.handle_key(ctrl('s')).await.unwrap();
            app.state.order_form.set_active_field(7);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.order_form.server_failure, "");
        }

        #[tokio::test]
        async fn test_successful_order_resets_form() {
            let mut mock = MockOrderApi::new();
            mock.expect_place_order()
                .times(1)
                .withf(|order| {
                    *order
                        == FormValues {
                            full_name: "Alice Smith".to_string(),
                            size: "M".to_string(),
                            toppings: vec![],
                        }
                })
                .returning(|_| {
                    Ok(OrderReceipt {
                        message: "Order placed".to_string(),
                    })
                });
            let mut app = app_with(mock, View::Order);
            fill_order(&mut app, "Alice Smith", 'm').await;
            assert!(!app.state.order_form.disabled);

            app.state.order_form.set_active_field(7);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            let form = &app.state.order_form;
            assert_eq!(form.values, FormValues::default());
            assert_eq!(form.server_success, "Order placed");
            assert_eq!(form.server_failure, "");
            assert!(form.disabled);
        }

        #[tokio::test]
        async fn test_network_failure_keeps_values() {
            let mut mock = MockOrderApi::new();
            mock.expect_place_order()
                .times(1)
                .returning(|_| Err(ApiError::Transport("connection refused".to_string())));
            let mut app = app_with(mock, View::Order);
            fill_order(&mut app, "Alice Smith", 'l').await;
            let before = app.state.order_form.values.clone();

            app.handle_key(ctrl('s')).await.unwrap();

            let form = &app.state.order_form;
            assert_eq!(form.values, before);
            assert_eq!(form.server_failure, GENERIC_FAILURE);
            assert_eq!(form.server_success, "");
            assert!(!form.disabled);
        }

        #[tokio::test]
        async fn test_modifier_enter_submits_from_any_field() {
            let mut mock = MockOrderApi::new();
            mock.expect_place_order().times(1).returning(|_| {
                Ok(OrderReceipt {
                    message: "Order placed".to_string(),
                })
            });
            let mut app = app_with(mock, View::Order);
            fill_order(&mut app, "Alice Smith", 's').await;
            app.state.order_form.set_active_field(0);

            app.handle_key(KeyEvent::new(
                KeyCode::Enter,
                crate::platform::SUBMIT_MODIFIER,
            ))
            .await
            .unwrap();

            let form = &app.state.order_form;
            assert_eq!(form.server_success, "Order placed");
            assert_eq!(form.values, FormValues::default());
            assert_eq!(form.active_field_index, 0);
        }

        #[tokio::test]
        async fn test_resubmit_after_failure() {
            let mut mock = MockOrderApi::new();
            let mut seq = mockall::Sequence::new();
            mock.expect_place_order()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| {
                    Err(ApiError::Rejected {
                        status: 503,
                        message: Some("Kitchen closed".to_string()),
                    })
                });
            mock.expect_place_order()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| {
                    Ok(OrderReceipt {
                        message: "Order placed".to_string(),
                    })
                });
            let mut app = app_with(mock, View::Order);
            fill_order(&mut app, "Bob", 's').await;

            app.submit_order().await;
            assert_eq!(app.state.order_form.server_failure, "Kitchen closed");
            assert_eq!(app.state.order_form.values.full_name, "Bob");

            app.submit_order().await;
            assert_eq!(app.state.order_form.server_failure, "");
            assert_eq!(app.state.order_form.server_success, "Order placed");
        }

        #[tokio::test]
        async fn test_toppings_are_sent() {
            let mut mock = MockOrderApi::new();
            mock.expect_place_order()
                .times(1)
                .withf(|order| order.toppings == vec!["3".to_string(), "5".to_string()])
                .returning(|_| Ok(OrderReceipt::default()));
            let mut app = app_with(mock, View::Order);
            fill_order(&mut app, "Carol", 'm').await;
            app.state.order_form.set_topping("3", true);
            app.state.order_form.set_topping("5", true);

            app.submit_order().await;

            assert!(app.state.order_form.values.toppings.is_empty());
        }
    }
}
