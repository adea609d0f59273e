pub mod state;

use contracts::domain::a003_booking::{Booking, StatusFilter, NO_BOOKINGS_MESSAGE};
use contracts::enums::BookingStatus;
use leptos::prelude::*;
use thaw::*;

use self::state::create_state;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::{format_booking_date, parse_iso_date};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_utils::SearchInput;

fn booking(
    id: &str,
    customer: &str,
    email: &str,
    destination: &str,
    date: &str,
    status: BookingStatus,
    amount: &str,
    guests: u32,
) -> Booking {
    Booking {
        id: id.to_string(),
        customer: customer.to_string(),
        email: email.to_string(),
        destination: destination.to_string(),
        date: parse_iso_date(date).unwrap_or_default(),
        status,
        amount: amount.to_string(),
        guests,
    }
}

/// Демо-данные последних бронирований
pub fn mock_bookings() -> Vec<Booking> {
    vec![
        booking("BK-001", "Ahmed Hassan", "ahmed@email.com", "Mogadishu City Tour", "2024-12-15", BookingStatus::Confirmed, "$980", 4),
        booking("BK-002", "Sarah Johnson", "sarah@email.com", "Somaliland Adventure", "2024-12-18", BookingStatus::Pending, "$2,300", 2),
        booking("BK-003", "Mohamed Ali", "mohamed@email.com", "Kismayo Beach Package", "2024-12-20", BookingStatus::Confirmed, "$1,200", 6),
        booking("BK-004", "Lisa Chen", "lisa@email.com", "Puntland Cultural Tour", "2024-12-22", BookingStatus::Cancelled, "$850", 3),
    ]
}

/// Таблица бронирований с поиском и фильтром по статусу
#[component]
#[allow(non_snake_case)]
pub fn BookingList(
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let state = create_state();
    let bookings = StoredValue::new(mock_bookings());
    let title = title.unwrap_or_else(|| "Recent Bookings".to_string());

    let visible = Memo::new(move |_| bookings.with_value(|items| state.visible(items)));

    let on_view = move |id: String| log::debug!("view booking {}", id);
    let on_edit = move |id: String| log::debug!("edit booking {}", id);

    view! {
        <div class="card booking-list">
            <div class="card__header booking-list__header">
                <h2 class="card__title">
                    {icon("clock")}
                    {title}
                </h2>
                <Flex gap=FlexGap::Small>
                    <SearchInput value=state.query placeholder="Search bookings..." />
                    <Select value=state.status_code>
                        {StatusFilter::all_options()
                            .into_iter()
                            .map(|option| view! { <option value=option.code()>{option.display_name()}</option> })
                            .collect_view()}
                    </Select>
                </Flex>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%; min-width: 900px;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Booking ID"</TableHeaderCell>
                            <TableHeaderCell>"Customer"</TableHeaderCell>
                            <TableHeaderCell>"Destination"</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Guests"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || visible.get().into_items()
                            key=|b| b.id.clone()
                            children=move |b: Booking| {
                                let id_for_view = b.id.clone();
                                let id_for_edit = b.id.clone();
                                let status = b.status.code().to_string();

                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="booking-list__id">{b.id.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="booking-list__customer">
                                                    <p class="booking-list__customer-name">{b.customer.clone()}</p>
                                                    <p class="booking-list__customer-email">{b.email.clone()}</p>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{b.destination.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_booking_date(b.date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="booking-list__guests">
                                                    {icon_sized("users", 16)}
                                                    {b.guests}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <strong>{b.amount.clone()}</strong>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge status=status />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| on_view(id_for_view.clone())
                                                    >
                                                        {icon_sized("eye", 16)}
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| on_edit(id_for_edit.clone())
                                                    >
                                                        "Edit"
                                                    </Button>
                                                </Flex>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <Show when=move || visible.with(|v| v.is_empty())>
                <div class="booking-list__empty">
                    {icon_sized("alert-circle", 48)}
                    <p>{NO_BOOKINGS_MESSAGE}</p>
                </div>
            </Show>
        </div>
    }
}
