/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.error_message, None;
///     model.success_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for handling response events with standard loading state and error handling.
///
/// On failure the [`AuthFailure`](crate::types::AuthFailure) message becomes the
/// model's error message, which the shell shows as a blocking notification.
///
/// # Example
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, token| {
///         m.session.set_token(token.access_token);
///     },
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                #[allow(clippy::redundant_locals)]
                let $success_model = $model;
                $success_body
            }
            Err(e) => {
                $model.set_error(e.message());
            }
        }
        crux_core::render::render()
    }};
}
