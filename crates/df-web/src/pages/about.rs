//! About page

use crate::components::*;
use df_core::widgets::{ButtonSize, ButtonVariant};
use leptos::*;

struct Member {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const TEAM: [Member; 3] = [
    Member {
        name: "Dipak Khandagale",
        role: "AI/ML Developer",
        bio: "Designs and implements the Deepfake Detection model, ensuring high accuracy and robust performance.",
    },
    Member {
        name: "Sayali More",
        role: "Web Developer",
        bio: "Designs the website, manages website architecture, integrates video processing, and ensures overall site functionality.",
    },
    Member {
        name: "Priya Marmat",
        role: "UI/UX Developer",
        bio: "Designs interactive and user-friendly interfaces and assists in testing the project to ensure usability and quality.",
    },
];

// (month, title, description)
const MILESTONES: [(&str, &str, &str); 5] = [
    ("Jan", "Project Kickoff", "Began our journey to explore deepfake detection and understand AI-based video analysis."),
    ("Mar", "Dataset & Model Development", "Collected video datasets and developed initial CNN models for deepfake detection."),
    ("May", "Web Platform Prototype", "Built the first prototype of the web platform integrating the detection model."),
    ("Jul", "Model Optimization", "Enhanced model accuracy with CNN-LSTM hybrid architecture and advanced preprocessing techniques."),
    ("Oct", "Platform Launch", "Released the functional deepfake detection platform with improved detection accuracy and user-friendly interface."),
];

const TECHNOLOGIES: [(&str, &str, &str); 4] = [
    ("🧠", "CNN + LSTM", "Hybrid neural network architecture for spatial and temporal analysis"),
    ("👁️", "OpenCV", "Computer vision library for image and video processing"),
    ("🖥️", "TensorFlow", "Machine learning framework for model training and inference"),
    ("🗄️", "Cloud Infrastructure", "Scalable cloud platform for real-time processing"),
];

const VALUES: [(&str, &str, &str); 4] = [
    ("🔒", "Privacy First", "We never store your files permanently. All uploads are automatically deleted after analysis."),
    ("🎯", "Accuracy", "Our models are continuously trained and updated to maintain the highest detection accuracy."),
    ("👁️", "Transparency", "We believe in explainable AI and provide detailed analysis reports for every detection."),
    ("🌐", "Accessibility", "Making advanced AI technology accessible to everyone, regardless of technical expertise."),
];

fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|part| part.chars().next()).collect()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            // Hero
            <section class="bg-gradient-to-br from-primary-50 via-white to-accent-50 dark:from-secondary-900 dark:via-secondary-800 dark:to-secondary-900 py-20">
                <div class="max-w-4xl mx-auto px-4 text-center">
                    <h1 class="text-4xl sm:text-5xl font-bold text-secondary-900 dark:text-white mb-6">
                        "Fighting Misinformation with "
                        <span class="bg-gradient-to-r from-primary-600 to-accent-600 bg-clip-text text-transparent">"AI Technology"</span>
                    </h1>
                    <p class="text-xl text-secondary-600 dark:text-secondary-400 mb-8">
                        "We're on a mission to combat deepfakes and promote media transparency "
                        "through cutting-edge artificial intelligence and computer vision."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a href="/upload"><Button size=ButtonSize::Lg>"Try Our Platform"</Button></a>
                        <a href="#team"><Button size=ButtonSize::Lg variant=ButtonVariant::Outline>"Meet the Team"</Button></a>
                    </div>
                </div>
            </section>

            // Mission
            <section class="py-20 bg-white dark:bg-secondary-800">
                <div class="max-w-7xl mx-auto px-4 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-3xl font-bold text-secondary-900 dark:text-white mb-6">"Our Mission"</h2>
                        <p class="text-lg text-secondary-600 dark:text-secondary-400 mb-6">
                            "In an era where AI-generated content is becoming increasingly sophisticated, "
                            "we believe that technology should be used to protect truth and authenticity rather than undermine it."
                        </p>
                        <p class="text-lg text-secondary-600 dark:text-secondary-400 mb-6">
                            "Our platform empowers individuals, journalists, and organizations to verify media authenticity "
                            "and combat the spread of misinformation through advanced deepfake detection technology."
                        </p>
                        <ul class="space-y-3">
                            {["Real-time detection with 94% accuracy", "Privacy-first approach with automatic file deletion", "Transparent AI with explainable results"]
                                .into_iter()
                                .map(|point| view! {
                                    <li class="flex items-center text-secondary-700 dark:text-secondary-300">
                                        <span class="text-green-500 mr-3">"✓"</span>
                                        {point}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <Card>
                        <h3 class="text-xl font-semibold text-secondary-900 dark:text-white mb-4">"How It Works"</h3>
                        <ol class="space-y-4">
                            {["Upload your image or video to our secure platform", "Our AI analyzes facial features, lighting, and temporal patterns", "Get detailed results with confidence scores and explanations"]
                                .into_iter()
                                .enumerate()
                                .map(|(index, step)| view! {
                                    <li class="flex items-start space-x-3">
                                        <span class="w-8 h-8 bg-primary-600 text-white rounded-full flex items-center justify-center font-bold flex-shrink-0">
                                            {index + 1}
                                        </span>
                                        <span class="text-secondary-600 dark:text-secondary-400">{step}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    </Card>
                </div>
            </section>

            // Technology
            <section class="py-20 bg-secondary-50 dark:bg-secondary-900">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl font-bold text-secondary-900 dark:text-white mb-4">"Built with Cutting-Edge Technology"</h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-3xl mx-auto">
                            "Our platform combines state-of-the-art machine learning models with robust infrastructure "
                            "to deliver accurate, fast, and reliable results."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {TECHNOLOGIES
                            .iter()
                            .map(|&(icon, name, description)| view! {
                                <Card hover=true class="text-center h-full">
                                    <div class="text-4xl mb-4">{icon}</div>
                                    <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-2">{name}</h3>
                                    <p class="text-sm text-secondary-600 dark:text-secondary-400">{description}</p>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Values
            <section class="py-20 bg-white dark:bg-secondary-800">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl font-bold text-secondary-900 dark:text-white mb-4">"Our Core Values"</h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-3xl mx-auto">
                            "These principles guide everything we do, from product development to user experience and AI ethics."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {VALUES
                            .iter()
                            .map(|&(icon, title, description)| view! {
                                <Card>
                                    <div class="flex items-start space-x-4">
                                        <div class="text-3xl">{icon}</div>
                                        <div>
                                            <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-2">{title}</h3>
                                            <p class="text-secondary-600 dark:text-secondary-400">{description}</p>
                                        </div>
                                    </div>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Team
            <section id="team" class="py-20 bg-secondary-50 dark:bg-secondary-900">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl font-bold text-secondary-900 dark:text-white mb-4">"Meet Our Team"</h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-400 max-w-3xl mx-auto">
                            "A diverse group of AI researchers, engineers, and product experts working together "
                            "to make the internet a more trustworthy place."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {TEAM
                            .iter()
                            .map(|member| view! {
                                <Card hover=true class="text-center">
                                    <div class="w-24 h-24 mx-auto mb-4 rounded-full bg-gradient-to-br from-primary-500 to-accent-500 flex items-center justify-center text-2xl font-bold text-white">
                                        {initials(member.name)}
                                    </div>
                                    <h3 class="text-xl font-semibold text-secondary-900 dark:text-white">{member.name}</h3>
                                    <p class="text-primary-600 dark:text-primary-400 mb-3">{member.role}</p>
                                    <p class="text-sm text-secondary-600 dark:text-secondary-400">{member.bio}</p>
                                </Card>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Milestones
            <section class="py-20 bg-white dark:bg-secondary-800">
                <div class="max-w-4xl mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl font-bold text-secondary-900 dark:text-white mb-4">"Our Journey"</h2>
                        <p class="text-xl text-secondary-600 dark:text-secondary-400">
                            "From a research project to a global platform, here are the key milestones in our mission to combat deepfakes."
                        </p>
                    </div>
                    <div class="space-y-8">
                        {MILESTONES
                            .iter()
                            .map(|&(month, title, description)| view! {
                                <div class="flex items-start space-x-6">
                                    <div class="w-16 h-16 bg-primary-600 text-white rounded-full flex items-center justify-center font-bold flex-shrink-0">
                                        {month}
                                    </div>
                                    <Card class="flex-1">
                                        <h3 class="text-lg font-semibold text-secondary-900 dark:text-white mb-2">{title}</h3>
                                        <p class="text-secondary-600 dark:text-secondary-400">{description}</p>
                                    </Card>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Call to action
            <section class="py-20 bg-gradient-to-r from-primary-600 to-accent-600">
                <div class="max-w-4xl mx-auto px-4 text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold text-white mb-6">"Join the Fight Against Deepfakes"</h2>
                    <p class="text-xl text-blue-100 mb-8">
                        "Be part of the solution. Use our platform to verify media authenticity and help create a more trustworthy digital world."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a href="/upload"><Button size=ButtonSize::Lg variant=ButtonVariant::Secondary>"Start Detecting"</Button></a>
                        <a href="/help"><Button size=ButtonSize::Lg variant=ButtonVariant::Outline>"Contact Us"</Button></a>
                    </div>
                </div>
            </section>
        </div>
    }
}
