//! Таблица с типизированными колонками и действиями по строке.
//!
//! Колонки описываются один раз для типа строки, тело таблицы
//! перерисовывается при изменении сигнала `rows`.

use crate::shared::icons::icon_sm;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

type CellFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
type ActionFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

pub struct Column<T> {
    pub title: &'static str,
    /// Доп. класс ячейки, например `table__cell--right`
    pub class: &'static str,
    pub min_width: Option<f32>,
    render: CellFn<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            class: self.class,
            min_width: self.min_width,
            render: self.render.clone(),
        }
    }
}

impl<T> Column<T> {
    pub fn new(title: &'static str, render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        Self {
            title,
            class: "",
            min_width: None,
            render: Arc::new(render),
        }
    }

    /// Простая текстовая колонка
    pub fn text(title: &'static str, value: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self::new(title, move |row| view! { <span>{value(row)}</span> }.into_any())
    }

    pub fn right(mut self) -> Self {
        self.class = "table__cell--right";
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn render(&self, row: &T) -> AnyView {
        (self.render)(row)
    }
}

pub struct RowAction<T> {
    pub title: &'static str,
    pub icon: &'static str,
    pub danger: bool,
    run: ActionFn<T>,
}

impl<T> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            icon: self.icon,
            danger: self.danger,
            run: self.run.clone(),
        }
    }
}

impl<T> RowAction<T> {
    pub fn new(title: &'static str, icon: &'static str, run: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self {
            title,
            icon,
            danger: false,
            run: Arc::new(run),
        }
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    pub fn run(&self, row: &T) {
        (self.run)(row)
    }
}

#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(optional)] actions: Vec<RowAction<T>>,
    /// Клик по строке (обычно открывает просмотр)
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let has_actions = !actions.is_empty();
    let col_span = (columns.len() + usize::from(has_actions)).to_string();
    let empty_text = empty_text.unwrap_or_else(|| "No records found".to_string());

    let header = columns
        .iter()
        .map(|col| {
            let min_width = col.min_width.unwrap_or(80.0);
            let title = col.title;
            view! {
                <TableHeaderCell resizable=true min_width=min_width>
                    {title}
                </TableHeaderCell>
            }
        })
        .collect_view();

    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);

    view! {
        <div class="data-table" style="width: 100%; overflow-x: auto;">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {header}
                        {has_actions.then(|| view! {
                            <TableHeaderCell min_width=100.0>
                                <span class="table__cell--right">"Actions"</span>
                            </TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let data = rows.get();
                        if data.is_empty() {
                            let col_span = col_span.clone();
                            let empty_text = empty_text.clone();
                            return vec![view! {
                                <TableRow>
                                    <TableCell attr:colspan=col_span>
                                        <TableCellLayout>
                                            <span class="text-muted">{empty_text}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_any()];
                        }

                        data.into_iter()
                            .map(|row| {
                                let cells = columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|col| {
                                            let class = col.class;
                                            let cell = col.render(&row);
                                            view! {
                                                <TableCell class=class>
                                                    <TableCellLayout>{cell}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view()
                                });

                                let action_cell = has_actions.then(|| {
                                    let buttons = actions.with_value(|acts| {
                                        acts.iter()
                                            .cloned()
                                            .map(|action| {
                                                let row = row.clone();
                                                let class = if action.danger {
                                                    "row-action row-action--danger"
                                                } else {
                                                    "row-action"
                                                };
                                                view! {
                                                    <button
                                                        class=class
                                                        title=action.title
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            action.run(&row);
                                                        }
                                                    >
                                                        {icon_sm(action.icon)}
                                                    </button>
                                                }
                                            })
                                            .collect_view()
                                    });
                                    view! {
                                        <TableCell class="table__cell--right">
                                            <div class="row-actions">{buttons}</div>
                                        </TableCell>
                                    }
                                });

                                let row_for_click = row.clone();
                                view! {
                                    <TableRow
                                        class="table__row"
                                        on:click=move |_| {
                                            if let Some(cb) = on_row_click {
                                                cb.run(row_for_click.clone());
                                            }
                                        }
                                    >
                                        {cells}
                                        {action_cell}
                                    </TableRow>
                                }.into_any()
                            })
                            .collect::<Vec<_>>()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
