//! Main application component

use crate::components::*;
use crate::context::AppContext;
use crate::pages::*;
use df_core::AppConfig;
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let app = AppContext::new(AppConfig::default());
    let theme = app.theme;

    let upload = app.clone();
    let results = app.clone();
    let nav = app.clone();

    view! {
        <Router>
            <div class=move || theme.get().root_class()>
                <div class="min-h-screen flex flex-col bg-white dark:bg-secondary-900 transition-colors">
                    <Navbar app=nav/>
                    <main class="flex-1">
                        <Routes>
                            <Route path="/" view=LandingPage/>
                            <Route path="/upload" view=move || view! { <UploadPage app=upload.clone()/> }/>
                            <Route path="/results" view=move || view! { <ResultsPage app=results.clone()/> }/>
                            <Route path="/about" view=AboutPage/>
                            <Route path="/help" view=HelpPage/>
                            <Route path="/news" view=NewsPage/>
                        </Routes>
                    </main>
                    <Footer/>
                </div>
            </div>
        </Router>
    }
}
