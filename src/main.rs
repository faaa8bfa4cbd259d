mod api;
mod categories;
mod chart;
mod money;
mod privacy;
mod storage;

use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::api::{entry_description, fetch_weekly_chart, submit_entry};
use crate::categories::{catalog, CategoryId, Direction, Icon, Selection};
use crate::chart::{axis_ticks, bar_height, nice_axis_max, tick_label, WeeklyChart};
use crate::money::parse_brl;
use crate::privacy::{PrivacyMask, STORAGE_KEY};

const CHART_WIDTH: f64 = 360.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 30.0;
const INCOME_COLOR: &str = "#34d399";
const EXPENSE_COLOR: &str = "#f87171";

#[derive(Clone, Copy, PartialEq)]
enum View {
    Home,
    Stats,
}

/// Lifecycle of the weekly data. `Failed` carries the message shown to the
/// user; the underlying error goes to the log.
#[derive(Clone, PartialEq)]
enum ChartState {
    Loading,
    Ready(WeeklyChart),
    Failed(String),
}

#[derive(Clone, Copy, PartialEq)]
enum CardIcon {
    TrendUp,
    TrendDown,
    Wallet,
    Calendar,
}

#[function_component(App)]
fn app() -> Html {
    let view = use_state(|| View::Home);
    let mask = use_state(|| PrivacyMask::from_stored(storage::read(STORAGE_KEY).as_deref()));
    let chart_state = use_state(|| ChartState::Loading);
    let show_entry = use_state(|| false);
    // Monotonic sequence for chart requests. A response only lands if its
    // token is still the newest, so a slow fetch can never overwrite the
    // result of a later one.
    let request_seq = use_mut_ref(|| 0u64);

    let load_chart = {
        let chart_state = chart_state.clone();
        let request_seq = request_seq.clone();
        Callback::from(move |_: ()| {
            let chart_state = chart_state.clone();
            let request_seq = request_seq.clone();

            let token = {
                let mut seq = request_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            chart_state.set(ChartState::Loading);

            spawn_local(async move {
                let outcome = fetch_weekly_chart().await;
                if *request_seq.borrow() != token {
                    log::debug!("dropping stale chart response (request {token})");
                    return;
                }
                match outcome {
                    Ok(week) => chart_state.set(ChartState::Ready(week)),
                    Err(err) => {
                        log::warn!("weekly chart load failed: {err}");
                        chart_state.set(ChartState::Failed(
                            "Não foi possível carregar os dados.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    {
        let load_chart = load_chart.clone();
        use_effect_with_deps(
            move |_| {
                load_chart.emit(());
                || ()
            },
            (),
        );
    }

    let on_select = {
        let view = view.clone();
        let load_chart = load_chart.clone();
        Callback::from(move |next: View| {
            // Entering the stats tab always refetches, even from itself.
            if next == View::Stats {
                load_chart.emit(());
            }
            view.set(next);
        })
    };

    let on_toggle_mask = {
        let mask = mask.clone();
        Callback::from(move |_| {
            let next = (*mask).toggled();
            storage::write(STORAGE_KEY, next.stored_value());
            mask.set(next);
        })
    };

    let on_open_entry = {
        let show_entry = show_entry.clone();
        Callback::from(move |_| show_entry.set(true))
    };

    let on_close_entry = {
        let show_entry = show_entry.clone();
        Callback::from(move |_| show_entry.set(false))
    };

    let on_entry_saved = {
        let show_entry = show_entry.clone();
        let load_chart = load_chart.clone();
        Callback::from(move |_: ()| {
            show_entry.set(false);
            load_chart.emit(());
        })
    };

    let content = match *view {
        View::Home => html! {
            <HomeView mask={*mask} chart_state={(*chart_state).clone()} />
        },
        View::Stats => html! {
            <StatsView mask={*mask} chart_state={(*chart_state).clone()} on_retry={load_chart.clone()} />
        },
    };

    html! {
        <div class="min-h-screen bg-slate-950 text-slate-100 max-w-md mx-auto flex flex-col relative">
            <HeaderBar mask={*mask} on_toggle_mask={on_toggle_mask} />
            <main class="flex-1 overflow-y-auto px-4 pb-24">
                { content }
            </main>
            if *show_entry {
                <EntryModal on_close={on_close_entry} on_saved={on_entry_saved} />
            }
            <TabBar active={*view} on_select={on_select} on_add={on_open_entry} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderBarProps {
    mask: PrivacyMask,
    on_toggle_mask: Callback<MouseEvent>,
}

#[function_component(HeaderBar)]
fn header_bar(props: &HeaderBarProps) -> Html {
    html! {
        <header class="h-14 sticky top-0 z-10 bg-slate-950/95 border-b border-slate-800 flex items-center justify-between px-4">
            <span class="text-lg font-black tracking-tight text-emerald-400">{"MotoGrana"}</span>
            <button
                class="p-2 rounded-full text-slate-300 hover:bg-slate-800 transition-colors"
                aria-label={if props.mask.is_hidden() { "Mostrar valores" } else { "Ocultar valores" }}
                onclick={props.on_toggle_mask.clone()}
            >
                { if props.mask.is_hidden() { icon_eye_off() } else { icon_eye() } }
            </button>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct TabBarProps {
    active: View,
    on_select: Callback<View>,
    on_add: Callback<MouseEvent>,
}

#[function_component(TabBar)]
fn tab_bar(props: &TabBarProps) -> Html {
    let tab = |label: &'static str, target: View, icon: fn() -> Html| -> Html {
        let is_active = props.active == target;
        let class_name = if is_active {
            "flex flex-col items-center gap-1 w-16 text-[11px] font-bold text-emerald-400"
        } else {
            "flex flex-col items-center gap-1 w-16 text-[11px] font-medium text-slate-500 hover:text-slate-300"
        };
        let on_select = props.on_select.clone();
        html! {
            <button class={class_name} onclick={Callback::from(move |_| on_select.emit(target))}>
                { icon() }
                <span>{ label }</span>
            </button>
        }
    };

    html! {
        <nav class="fixed bottom-0 inset-x-0 max-w-md mx-auto h-16 bg-slate-900 border-t border-slate-800 flex items-center justify-around z-10">
            { tab("Início", View::Home, icon_home) }
            <button
                class="w-12 h-12 -mt-6 rounded-full bg-emerald-500 text-slate-950 flex items-center justify-center shadow-lg hover:bg-emerald-400 transition-colors"
                aria-label="Novo lançamento"
                onclick={props.on_add.clone()}
            >
                { icon_plus() }
            </button>
            { tab("Estatísticas", View::Stats, icon_bar_chart) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HomeViewProps {
    mask: PrivacyMask,
    chart_state: ChartState,
}

#[function_component(HomeView)]
fn home_view(props: &HomeViewProps) -> Html {
    // Today is the last day of the window the backend returns.
    let summary = match &props.chart_state {
        ChartState::Ready(week) => {
            let today = week.today();
            Some((
                today.map_or(0, |d| d.income),
                today.map_or(0, |d| d.expense),
                week.total_income(),
            ))
        }
        _ => None,
    };

    let income_today = summary.map(|(income, _, _)| income);
    let expense_today = summary.map(|(_, expense, _)| expense);
    let balance_today = summary.map(|(income, expense, _)| income - expense);
    let week_income = summary.map(|(_, _, week)| week);

    html! {
        <section class="pt-4 space-y-4">
            <h2 class="text-lg font-bold text-slate-100">{"Resumo de hoje"}</h2>
            <div class="grid grid-cols-2 gap-3">
                <MoneyCard title="Ganhos hoje" value={income_today} mask={props.mask} icon={CardIcon::TrendUp} tone="text-emerald-400" />
                <MoneyCard title="Gastos hoje" value={expense_today} mask={props.mask} icon={CardIcon::TrendDown} tone="text-red-400" />
                <MoneyCard title="Saldo de hoje" value={balance_today} mask={props.mask} icon={CardIcon::Wallet} tone="text-slate-100" />
                <MoneyCard title="Ganhos na semana" value={week_income} mask={props.mask} icon={CardIcon::Calendar} tone="text-emerald-400" />
            </div>
            if let ChartState::Failed(message) = &props.chart_state {
                <p class="text-xs text-red-400">{ message.clone() }</p>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct MoneyCardProps {
    title: &'static str,
    value: Option<i64>,
    mask: PrivacyMask,
    icon: CardIcon,
    tone: &'static str,
}

#[function_component(MoneyCard)]
fn money_card(props: &MoneyCardProps) -> Html {
    let value = match props.value {
        Some(centavos) => props.mask.amount(centavos),
        None => "...".to_string(),
    };

    html! {
        <div class="bg-slate-900 p-4 rounded-2xl border border-slate-800 flex justify-between items-start">
            <div>
                <p class="text-slate-400 text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class={format!("text-xl font-bold tracking-tight {}", props.tone)}>{ value }</h3>
            </div>
            <div class="p-2 bg-slate-800 rounded-xl text-slate-300">
                {
                    match props.icon {
                        CardIcon::TrendUp => icon_trending_up(),
                        CardIcon::TrendDown => icon_trending_down(),
                        CardIcon::Wallet => icon_wallet(),
                        CardIcon::Calendar => icon_calendar(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatsViewProps {
    mask: PrivacyMask,
    chart_state: ChartState,
    on_retry: Callback<()>,
}

#[function_component(StatsView)]
fn stats_view(props: &StatsViewProps) -> Html {
    let on_retry = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_| on_retry.emit(()))
    };

    html! {
        <section class="pt-4 space-y-3">
            <h2 class="text-lg font-bold text-slate-100">{"Últimos 7 dias"}</h2>
            {
                match &props.chart_state {
                    ChartState::Loading => html! {
                        <div class="h-[300px] bg-slate-900 rounded-2xl border border-slate-800 flex items-center justify-center text-sm text-slate-500">
                            {"Carregando gráfico..."}
                        </div>
                    },
                    ChartState::Failed(message) => html! {
                        <div class="h-[300px] bg-slate-900 rounded-2xl border border-slate-800 flex flex-col items-center justify-center gap-3">
                            <p class="text-sm text-red-400">{ message.clone() }</p>
                            <button
                                class="px-4 py-2 rounded-xl bg-slate-800 text-slate-200 text-sm font-bold hover:bg-slate-700 transition-colors"
                                onclick={on_retry}
                            >
                                {"Tentar de novo"}
                            </button>
                        </div>
                    },
                    ChartState::Ready(week) if week.is_empty() => html! {
                        <div class="h-[300px] bg-slate-900 rounded-2xl border border-slate-800 flex items-center justify-center text-sm text-slate-500">
                            {"Sem lançamentos na semana."}
                        </div>
                    },
                    ChartState::Ready(week) => html! {
                        <>
                            <WeeklyBarChart week={week.clone()} />
                            <div class="bg-slate-900 rounded-2xl border border-slate-800 px-4 py-3 flex items-center justify-between text-sm">
                                <span class="text-slate-400">{"Entradas na semana"}</span>
                                <span class="font-bold text-emerald-400">{ props.mask.amount(week.total_income()) }</span>
                            </div>
                            <div class="bg-slate-900 rounded-2xl border border-slate-800 px-4 py-3 flex items-center justify-between text-sm">
                                <span class="text-slate-400">{"Saídas na semana"}</span>
                                <span class="font-bold text-red-400">{ props.mask.amount(week.total_expense()) }</span>
                            </div>
                        </>
                    },
                }
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct WeeklyBarChartProps {
    week: WeeklyChart,
}

#[function_component(WeeklyBarChart)]
fn weekly_bar_chart(props: &WeeklyBarChartProps) -> Html {
    let days = props.week.days();
    if days.is_empty() {
        return html! {};
    }

    let axis_max = nice_axis_max(props.week.max_amount());
    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_height;
    let group_width = plot_width / days.len() as f64;
    let bar_width = (group_width * 0.32).min(12.0);
    let pair_gap = 4.0;

    html! {
        <div class="bg-slate-900 rounded-2xl border border-slate-800 p-3">
            <svg
                viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")}
                class="w-full h-auto"
                role="img"
                aria-label="Gráfico semanal de entradas e saídas"
            >
                { for axis_ticks(axis_max).into_iter().map(|tick| {
                    let y = baseline - bar_height(tick, axis_max, plot_height);
                    html! {
                        <g>
                            <line
                                x1={px(MARGIN_LEFT)} y1={px(y)}
                                x2={px(CHART_WIDTH - MARGIN_RIGHT)} y2={px(y)}
                                stroke="#1e293b" stroke-width="1"
                            />
                            <text x={px(MARGIN_LEFT - 6.0)} y={px(y + 3.0)} text-anchor="end" font-size="9" fill="#64748b">
                                { tick_label(tick) }
                            </text>
                        </g>
                    }
                }) }
                { for days.iter().enumerate().map(|(i, day)| {
                    let center = MARGIN_LEFT + group_width * i as f64 + group_width / 2.0;
                    let income_height = bar_height(day.income, axis_max, plot_height);
                    let expense_height = bar_height(day.expense, axis_max, plot_height);
                    html! {
                        <g>
                            <rect
                                x={px(center - bar_width - pair_gap / 2.0)}
                                y={px(baseline - income_height)}
                                width={px(bar_width)} height={px(income_height)}
                                rx="2" fill={INCOME_COLOR}
                            />
                            <rect
                                x={px(center + pair_gap / 2.0)}
                                y={px(baseline - expense_height)}
                                width={px(bar_width)} height={px(expense_height)}
                                rx="2" fill={EXPENSE_COLOR}
                            />
                            <text x={px(center)} y={px(baseline + 14.0)} text-anchor="middle" font-size="9" fill="#94a3b8">
                                { day.label.clone() }
                            </text>
                        </g>
                    }
                }) }
            </svg>
            <div class="flex items-center justify-center gap-4 mt-1 text-[11px] text-slate-400">
                <span class="flex items-center gap-1.5">
                    <span class="w-2.5 h-2.5 rounded-sm" style={format!("background: {INCOME_COLOR}")}></span>
                    {"Entradas"}
                </span>
                <span class="flex items-center gap-1.5">
                    <span class="w-2.5 h-2.5 rounded-sm" style={format!("background: {EXPENSE_COLOR}")}></span>
                    {"Saídas"}
                </span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EntryModalProps {
    on_close: Callback<MouseEvent>,
    on_saved: Callback<()>,
}

#[function_component(EntryModal)]
fn entry_modal(props: &EntryModalProps) -> Html {
    let selection = use_state(|| Selection::new(Direction::Income));
    let description = use_state(|| "".to_string());
    let amount = use_state(|| "".to_string());
    let litres = use_state(|| "".to_string());
    let odometer = use_state(|| "".to_string());
    let saving = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    let on_direction = {
        let selection = selection.clone();
        let description = description.clone();
        let litres = litres.clone();
        let odometer = odometer.clone();
        Callback::from(move |direction: Direction| {
            let mut next = (*selection).clone();
            next.set_direction(direction);
            selection.set(next);
            // A direction change never keeps text from the other catalog.
            description.set("".to_string());
            litres.set("".to_string());
            odometer.set("".to_string());
        })
    };

    let on_chip = {
        let selection = selection.clone();
        let description = description.clone();
        let litres = litres.clone();
        let odometer = odometer.clone();
        Callback::from(move |id: CategoryId| {
            let mut next = (*selection).clone();
            if let Some(category) = next.choose(id) {
                description.set(category.name.to_string());
                if !category.fuel_details {
                    litres.set("".to_string());
                    odometer.set("".to_string());
                }
            }
            selection.set(next);
        })
    };

    let on_submit = {
        let selection = selection.clone();
        let description = description.clone();
        let amount = amount.clone();
        let litres = litres.clone();
        let odometer = odometer.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |_| {
            let description_val = description.trim().to_string();
            let amount_val = amount.trim().to_string();

            if description_val.is_empty() {
                form_error.set(Some(
                    "Escolha uma categoria ou descreva o lançamento.".to_string(),
                ));
                return;
            }

            let centavos = match parse_brl(&amount_val) {
                Ok(v) if v > 0 => v,
                _ => {
                    form_error.set(Some("Informe um valor válido, ex: 25,50.".to_string()));
                    return;
                }
            };

            let direction = selection.direction();
            let final_description = if selection.fuel_fields_visible() {
                entry_description(&description_val, &litres, &odometer)
            } else {
                description_val
            };

            form_error.set(None);
            saving.set(true);

            let saving = saving.clone();
            let form_error = form_error.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match submit_entry(direction, centavos, &final_description).await {
                    Ok(()) => {
                        saving.set(false);
                        on_saved.emit(());
                    }
                    Err(err) => {
                        log::warn!("entry submit failed: {err}");
                        form_error.set(Some("Não foi possível salvar. Tente de novo.".to_string()));
                        saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="fixed inset-0 z-20 bg-black/60 flex items-end justify-center" onclick={props.on_close.clone()}>
            <div
                class="w-full max-w-md bg-slate-900 rounded-t-3xl p-5 pb-8 space-y-4"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-bold text-slate-100">{"Novo lançamento"}</h2>
                    <button class="p-2 text-slate-400 hover:text-slate-200" aria-label="Fechar" onclick={props.on_close.clone()}>
                        { icon_x() }
                    </button>
                </div>

                <div class="grid grid-cols-2 gap-2 bg-slate-800 p-1 rounded-xl">
                    { for [Direction::Income, Direction::Expense].into_iter().map(|direction| {
                        let is_active = selection.direction() == direction;
                        let class_name = if is_active {
                            match direction {
                                Direction::Income => "py-2 rounded-lg text-sm font-bold bg-emerald-500 text-slate-950",
                                Direction::Expense => "py-2 rounded-lg text-sm font-bold bg-red-500 text-slate-950",
                            }
                        } else {
                            "py-2 rounded-lg text-sm font-medium text-slate-400 hover:text-slate-200"
                        };
                        let on_direction = on_direction.clone();
                        html! {
                            <button class={class_name} onclick={Callback::from(move |_| on_direction.emit(direction))}>
                                { direction.label() }
                            </button>
                        }
                    }) }
                </div>

                <div class="flex flex-wrap gap-2">
                    { for catalog(selection.direction()).iter().map(|category| {
                        let is_active = selection.is_active(category.id);
                        let class_name = if is_active {
                            "flex items-center gap-1.5 px-3 py-1.5 rounded-full text-xs font-bold bg-emerald-500/15 text-emerald-300 border border-emerald-500"
                        } else {
                            "flex items-center gap-1.5 px-3 py-1.5 rounded-full text-xs font-medium bg-slate-800 text-slate-300 border border-transparent hover:border-slate-600"
                        };
                        let on_chip = on_chip.clone();
                        let id = category.id;
                        html! {
                            <button class={class_name} onclick={Callback::from(move |_| on_chip.emit(id))}>
                                { category_icon(category.icon) }
                                { category.name }
                            </button>
                        }
                    }) }
                </div>

                <div class="space-y-3">
                    <div class="space-y-1">
                        <label class="text-xs font-medium text-slate-400">{"Descrição"}</label>
                        <input
                            class="w-full px-3 py-2 bg-slate-800 border border-slate-700 rounded-lg text-sm text-slate-100 focus:outline-none focus:ring-2 focus:ring-emerald-500"
                            value={(*description).clone()}
                            oninput={{
                                let description = description.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    description.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-xs font-medium text-slate-400">{"Valor (R$)"}</label>
                        <input
                            inputmode="decimal"
                            placeholder="0,00"
                            class="w-full px-3 py-2 bg-slate-800 border border-slate-700 rounded-lg text-sm text-slate-100 focus:outline-none focus:ring-2 focus:ring-emerald-500"
                            value={(*amount).clone()}
                            oninput={{
                                let amount = amount.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    amount.set(input.value());
                                })
                            }}
                        />
                    </div>

                    if selection.fuel_fields_visible() {
                        <div class="grid grid-cols-2 gap-3">
                            <div class="space-y-1">
                                <label class="text-xs font-medium text-slate-400">{"Litros"}</label>
                                <input
                                    inputmode="decimal"
                                    class="w-full px-3 py-2 bg-slate-800 border border-slate-700 rounded-lg text-sm text-slate-100 focus:outline-none focus:ring-2 focus:ring-emerald-500"
                                    value={(*litres).clone()}
                                    oninput={{
                                        let litres = litres.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            litres.set(input.value());
                                        })
                                    }}
                                />
                            </div>
                            <div class="space-y-1">
                                <label class="text-xs font-medium text-slate-400">{"Km atual"}</label>
                                <input
                                    inputmode="numeric"
                                    class="w-full px-3 py-2 bg-slate-800 border border-slate-700 rounded-lg text-sm text-slate-100 focus:outline-none focus:ring-2 focus:ring-emerald-500"
                                    value={(*odometer).clone()}
                                    oninput={{
                                        let odometer = odometer.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            odometer.set(input.value());
                                        })
                                    }}
                                />
                            </div>
                        </div>
                    }
                </div>

                if let Some(msg) = &*form_error {
                    <p class="text-sm text-red-400">{ msg.clone() }</p>
                }

                <button
                    class="w-full py-3 rounded-xl bg-emerald-500 text-slate-950 font-bold hover:bg-emerald-400 transition-colors disabled:opacity-60"
                    disabled={*saving}
                    onclick={on_submit}
                >
                    { if *saving { "Salvando..." } else { "Salvar" } }
                </button>
            </div>
        </div>
    }
}

fn px(value: f64) -> String {
    format!("{value:.1}")
}

fn category_icon(icon: Icon) -> Html {
    match icon {
        Icon::Burger => icon_burger(),
        Icon::Motorcycle => icon_motorcycle(),
        Icon::Helmet => icon_helmet(),
        Icon::Package => icon_package(),
        Icon::FuelPump => icon_fuel_pump(),
        Icon::Wrench => icon_wrench(),
        Icon::Cutlery => icon_cutlery(),
        Icon::Phone => icon_phone(),
        Icon::Invoice => icon_invoice(),
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_eye() -> Html {
    icon_base("M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8zM12 12m-3 0a3 3 0 106 0 3 3 0 10-6 0")
}
fn icon_eye_off() -> Html {
    icon_base("M17.94 17.94A10.07 10.07 0 0112 20c-7 0-11-8-11-8a18.45 18.45 0 015.06-5.94M9.9 4.24A9.12 9.12 0 0112 4c7 0 11 8 11 8a18.5 18.5 0 01-2.16 3.19M1 1l22 22")
}
fn icon_home() -> Html {
    icon_base("M3 9l9-7 9 7v11a2 2 0 01-2 2H5a2 2 0 01-2-2zM9 22V12h6v10")
}
fn icon_bar_chart() -> Html {
    icon_base("M4 20v-8M10 20V6M16 20v-4M2 20h20")
}
fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
fn icon_x() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7M14 8h6v6")
}
fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7M14 16h6v-6")
}
fn icon_wallet() -> Html {
    icon_base("M3 7a2 2 0 012-2h14a2 2 0 012 2v10a2 2 0 01-2 2H5a2 2 0 01-2-2zM15 12h4")
}
fn icon_calendar() -> Html {
    icon_base("M3 5h18v16H3zM3 9h18M8 3v4M16 3v4")
}
fn icon_burger() -> Html {
    icon_base("M4 10a8 8 0 0116 0M4 10h16M4 14h16M5 18h14")
}
fn icon_motorcycle() -> Html {
    icon_base("M5 17m-3 0a3 3 0 106 0 3 3 0 10-6 0M19 17m-3 0a3 3 0 106 0 3 3 0 10-6 0M5 17l4-6h5l3 6M14 8h3l2 4")
}
fn icon_helmet() -> Html {
    icon_base("M4 14a8 8 0 0116 0v3H4zM13 14h7")
}
fn icon_package() -> Html {
    icon_base("M21 8l-9-5-9 5v8l9 5 9-5zM3 8l9 5 9-5M12 13v8")
}
fn icon_fuel_pump() -> Html {
    icon_base("M4 21V5a2 2 0 012-2h6a2 2 0 012 2v16M2 21h14M14 10h2a2 2 0 012 2v5a1.5 1.5 0 003 0V9l-3-3")
}
fn icon_wrench() -> Html {
    icon_base("M14.7 6.3a4.5 4.5 0 00-6 6L3 18l3 3 5.7-5.7a4.5 4.5 0 006-6L14 13l-3-3z")
}
fn icon_cutlery() -> Html {
    icon_base("M7 3v7a2 2 0 002 2v9M11 3v7a2 2 0 01-2 2M17 3v18M17 3c-2 0-3 2-3 5v3h3")
}
fn icon_phone() -> Html {
    icon_base("M7 2h10a1 1 0 011 1v18a1 1 0 01-1 1H7a1 1 0 01-1-1V3a1 1 0 011-1zM11 18h2")
}
fn icon_invoice() -> Html {
    icon_base("M6 2h9l5 5v15H6zM15 2v5h5M9 12h6M9 16h6")
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
