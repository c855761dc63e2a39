//! Crypto payment page.

use leptos::prelude::*;

use contract::PayWithCryptoArgs;

use crate::components::field::Field;
use crate::state::notice::NoticeState;
use crate::state::payment::PaymentState;
use crate::util::form;

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

/// Validate the payment form into contract arguments.
fn validate_payment_form(
    case_id: &str,
    amount: &str,
) -> Result<PayWithCryptoArgs, &'static str> {
    let case_id = form::parse_case_id(case_id).ok_or("Enter a numeric case id.")?;
    let amount = form::parse_amount(amount).ok_or("Enter a whole payment amount.")?;

    Ok(PayWithCryptoArgs { case_id, amount })
}

/// Payment page: pays for a case and shows the issued receipt token.
///
/// A refused payment leaves everything, including any prior receipt,
/// untouched.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let payment = expect_context::<RwSignal<PaymentState>>();

    let case_id = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let args = match validate_payment_form(&case_id.get(), &amount.get()) {
            Ok(args) => args,
            Err(message) => {
                notice.update(|n| n.failure(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::pay_with_crypto(&args).await {
                    Ok(Some(receipt)) => {
                        payment.update(|p| {
                            p.apply_reply(Some(receipt.clone()));
                        });
                        notice.update(|n| {
                            n.success(format!("Payment accepted. Receipt: {receipt}"));
                        });
                        case_id.set(String::new());
                        amount.set(String::new());
                    }
                    Ok(None) => {
                        notice.update(|n| {
                            n.failure("Payment failed: unknown case or unauthorized payer.");
                        });
                    }
                    Err(err) => {
                        leptos::logging::warn!("payWithCrypto failed: {err}");
                        notice.update(|n| n.failure("Payment failed."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = args;
        }
    };

    view! {
        <div class="payment-page">
            <section class="form-card">
                <h2>"Pay with crypto"</h2>
                <form on:submit=on_submit>
                    <Field label="Case id" value=case_id input_type="number"/>
                    <Field label="Amount" value=amount input_type="number" placeholder="100"/>
                    <button class="btn btn--primary" type="submit">
                        "Pay"
                    </button>
                </form>
            </section>

            <Show when=move || payment.get().receipt.is_some()>
                <div class="token-panel">
                    <h3>"Your maintenance receipt"</h3>
                    <p class="token-panel__value">
                        {move || payment.get().receipt.unwrap_or_default()}
                    </p>
                </div>
            </Show>
        </div>
    }
}
