// LAMS PWA Shell — Leptos 0.8 Edition

mod api;
mod browser;
mod components;
mod guards;
mod pages;
mod stores;
mod themed;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use components::Nav;
use guards::{GuestOnly, RequireAuth, RequireRole};
use pages::{DashboardPage, HomePage, LoginPage, ThemedExamplePage, UnauthorizedPage};
use stores::{SessionStore, ThemeStore};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Store initialization order matters: the theme store reads
    // storage and the OS preference before anything renders.
    provide_context(ThemeStore::init());
    provide_context(SessionStore::init());

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/login"/> }/>
                    <Route
                        path=path!("/login")
                        view=|| view! { <GuestOnly><LoginPage/></GuestOnly> }
                    />
                    <Route
                        path=path!("/home")
                        view=|| view! { <RequireAuth><HomePage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/themed")
                        view=|| view! { <RequireAuth><ThemedExamplePage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/admin/dashboard")
                        view=|| view! {
                            <RequireRole roles=vec!["admin"]>
                                <DashboardPage
                                    title="Admin Dashboard"
                                    blurb="User management, course catalogs and system settings land here."
                                />
                            </RequireRole>
                        }
                    />
                    <Route
                        path=path!("/teacher/dashboard")
                        view=|| view! {
                            <RequireRole roles=vec!["teacher", "faculty"]>
                                <DashboardPage
                                    title="Teacher Dashboard"
                                    blurb="Lesson sequences and class monitoring land here."
                                />
                            </RequireRole>
                        }
                    />
                    <Route
                        path=path!("/lab/dashboard")
                        view=|| view! {
                            <RequireRole roles=vec!["labtech", "lab_technician"]>
                                <DashboardPage
                                    title="Lab Dashboard"
                                    blurb="Equipment schedules and lab sessions land here."
                                />
                            </RequireRole>
                        }
                    />
                    <Route
                        path=path!("/student/dashboard")
                        view=|| view! {
                            <RequireRole roles=vec!["student"]>
                                <DashboardPage
                                    title="Student Dashboard"
                                    blurb="Your activities and progress land here."
                                />
                            </RequireRole>
                        }
                    />
                    <Route path=path!("/unauthorized") view=UnauthorizedPage/>
                </Routes>
            </main>
        </Router>
    }
}
