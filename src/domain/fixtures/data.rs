use std::collections::BTreeMap;

use time::macros::date;
use url::Url;

use crate::domain::entities::{AuthorRecord, CommentRecord, PostRecord};
use crate::domain::types::{AuthorId, CommentId, PostId};

fn fixture_url(raw: &str) -> Url {
    Url::parse(raw).expect("valid fixture url")
}

fn social_links(entries: &[(&str, &str)]) -> BTreeMap<String, Url> {
    entries
        .iter()
        .map(|(platform, href)| ((*platform).to_string(), fixture_url(href)))
        .collect()
}

pub fn authors() -> Vec<AuthorRecord> {
    vec![
        AuthorRecord {
            id: AuthorId::from("author-1"),
            name: "John Doe".to_string(),
            avatar_url: fixture_url("https://i.pravatar.cc/150?img=1"),
            bio: "Tech enthusiast and software developer with over 10 years of experience in web development.".to_string(),
            social_links: social_links(&[
                ("twitter", "https://twitter.com/johndoe"),
                ("github", "https://github.com/johndoe"),
            ]),
        },
        AuthorRecord {
            id: AuthorId::from("author-2"),
            name: "Jane Smith".to_string(),
            avatar_url: fixture_url("https://i.pravatar.cc/150?img=5"),
            bio: "UX designer and frontend developer passionate about creating beautiful and functional user interfaces.".to_string(),
            social_links: social_links(&[
                ("twitter", "https://twitter.com/janesmith"),
                ("instagram", "https://instagram.com/janesmith"),
            ]),
        },
        AuthorRecord {
            id: AuthorId::from("author-3"),
            name: "Alex Johnson".to_string(),
            avatar_url: fixture_url("https://i.pravatar.cc/150?img=3"),
            bio: "Full-stack developer and tech blogger. Loves to share knowledge about the latest technologies.".to_string(),
            social_links: social_links(&[
                ("github", "https://github.com/alexjohnson"),
                ("facebook", "https://facebook.com/alexjohnson"),
            ]),
        },
    ]
}

pub fn posts() -> Vec<PostRecord> {
    vec![
        PostRecord {
            id: PostId::from("post-1"),
            title: "Getting Started with Next.js and TypeScript".to_string(),
            excerpt: "Learn how to set up a new project with Next.js and TypeScript for a better development experience.".to_string(),
            body_markdown: r#"# Getting Started with Next.js and TypeScript

Next.js is a React framework that enables server-side rendering, static site
generation, and more. TypeScript is a typed superset of JavaScript. Together
they make an application harder to break and easier to navigate.

## Setting Up Your Project

```bash
npx create-next-app@latest my-app --typescript
```

The generated project compiles out of the box; every page under `pages/` (or
route under `app/`) becomes a route with no extra configuration.

## Why the Combination Works

- **Server-side rendering** keeps the first paint fast and crawlable.
- **Static generation** serves stable pages from a CDN.
- **Static types** catch the broken prop before the browser does.
- **File-system routing** means the directory tree is the route table.

Start strict: enable `"strict": true` in `tsconfig.json` on day one. Retrofitting
strictness onto a grown codebase is the expensive way around.
"#.to_string(),
            cover_image_url: fixture_url("https://images.unsplash.com/photo-1555066931-4365d14bab8c"),
            published_on: date!(2023 - 05 - 15),
            author_id: AuthorId::from("author-1"),
            tags: vec![
                "Next.js".to_string(),
                "TypeScript".to_string(),
                "React".to_string(),
                "Web Development".to_string(),
            ],
            featured: true,
            trending: true,
        },
        PostRecord {
            id: PostId::from("post-2"),
            title: "Mastering CSS Grid Layout".to_string(),
            excerpt: "A comprehensive guide to using CSS Grid Layout for creating complex web layouts with ease.".to_string(),
            body_markdown: r#"# Mastering CSS Grid Layout

CSS Grid divides a container into rows and columns and lets you place items
anywhere on the resulting grid. It is the first layout system on the web that
is genuinely two-dimensional.

## The Smallest Useful Grid

```css
.container {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
}
```

Three equal columns, a gutter, and no clearfix hacks. Items flow into cells in
source order unless told otherwise.

## Placing Items Explicitly

Named grid areas read like a floor plan: define `grid-template-areas` on the
container, assign `grid-area` on the children, and the layout survives
reordering in the markup. Combined with `minmax()` and `auto-fit`, a single
rule produces a gallery that collapses from four columns to one without a
media query.
"#.to_string(),
            cover_image_url: fixture_url("https://images.unsplash.com/photo-1517180102446-f3ece451e9d8"),
            published_on: date!(2023 - 06 - 20),
            author_id: AuthorId::from("author-2"),
            tags: vec![
                "CSS".to_string(),
                "Web Design".to_string(),
                "Layout".to_string(),
                "Frontend".to_string(),
            ],
            featured: true,
            trending: false,
        },
        PostRecord {
            id: PostId::from("post-3"),
            title: "Introduction to Framer Motion".to_string(),
            excerpt: "Learn how to add beautiful animations to your React applications using Framer Motion.".to_string(),
            body_markdown: r#"# Introduction to Framer Motion

Framer Motion is a production-ready animation library for React. Instead of
keyframes and timelines, you declare the target state and the library works
out the spring physics to get there.

## A First Animation

```jsx
import { motion } from "framer-motion";

export function Card() {
  return (
    <motion.div
      initial={{ opacity: 0, y: 16 }}
      animate={{ opacity: 1, y: 0 }}
      transition={{ duration: 0.4 }}
    />
  );
}
```

## Beyond Enter Transitions

Gestures (`whileHover`, `whileTap`), layout animations, and `AnimatePresence`
for exit transitions cover most interface motion. The mental model stays the
same throughout: describe states, let the library interpolate. Animation code
that reads like state code is animation code that gets maintained.
"#.to_string(),
            cover_image_url: fixture_url("https://images.unsplash.com/photo-1550063873-ab792950096b"),
            published_on: date!(2023 - 07 - 10),
            author_id: AuthorId::from("author-3"),
            tags: vec![
                "React".to_string(),
                "Animation".to_string(),
                "Framer Motion".to_string(),
                "Frontend".to_string(),
            ],
            featured: false,
            trending: true,
        },
        PostRecord {
            id: PostId::from("post-4"),
            title: "Building a RESTful API with Node.js and Express".to_string(),
            excerpt: "A step-by-step guide to building a RESTful API using Node.js and Express.".to_string(),
            body_markdown: r#"# Building a RESTful API with Node.js and Express

Express stays popular because it does so little: routing, middleware, and
request/response plumbing. A resource-oriented API falls out of a handful of
route definitions.

## Routes as the Contract

```js
const app = express();
app.use(express.json());

app.get("/api/posts", listPosts);
app.get("/api/posts/:id", getPost);
app.post("/api/posts", createPost);
app.delete("/api/posts/:id", deletePost);
```

## What Keeps an API Maintainable

- Validate at the edge; handlers should receive data already shaped.
- Return consistent error envelopes, not ad-hoc strings.
- Put the database behind a small repository module so the handlers stay
  testable without a live server.

Version the API from the first deploy. `/api/v1` costs nothing today and
saves a migration scramble later.
"#.to_string(),
            cover_image_url: fixture_url("https://images.unsplash.com/photo-1555099962-4199c345e5dd"),
            published_on: date!(2023 - 08 - 05),
            author_id: AuthorId::from("author-1"),
            tags: vec![
                "Node.js".to_string(),
                "Express".to_string(),
                "API".to_string(),
                "Backend".to_string(),
            ],
            featured: false,
            trending: true,
        },
        PostRecord {
            id: PostId::from("post-5"),
            title: "Understanding React Hooks".to_string(),
            excerpt: "A deep dive into React Hooks and how they can simplify your React components.".to_string(),
            body_markdown: r#"# Understanding React Hooks

Hooks let function components hold state and participate in the component
lifecycle, which used to require classes. The two you reach for daily are
`useState` and `useEffect`.

## State Without Classes

```jsx
function Counter() {
  const [count, setCount] = useState(0);
  return <button onClick={() => setCount(count + 1)}>{count}</button>;
}
```

## Effects and Their Dependencies

`useEffect` runs after render; its dependency array decides how often. An
empty array means once on mount, a populated one means whenever those values
change. Most hook bugs are dependency-array bugs, so lint with
`react-hooks/exhaustive-deps` and believe what it tells you.

Custom hooks are just functions that call other hooks: extract one the moment
two components duplicate stateful logic.
"#.to_string(),
            cover_image_url: fixture_url("https://images.unsplash.com/photo-1633356122544-f134324a6cee"),
            published_on: date!(2023 - 09 - 12),
            author_id: AuthorId::from("author-2"),
            tags: vec![
                "React".to_string(),
                "Hooks".to_string(),
                "JavaScript".to_string(),
                "Frontend".to_string(),
            ],
            featured: true,
            trending: false,
        },
        PostRecord {
            id: PostId::from("post-6"),
            title: "Introduction to TailwindCSS".to_string(),
            excerpt: "Learn how to use TailwindCSS to rapidly build modern websites without leaving your HTML.".to_string(),
            body_markdown: r#"# Introduction to TailwindCSS

Tailwind is a utility-first CSS framework: instead of inventing class names
and switching files, you compose small single-purpose utilities directly in
the markup.

## Utilities in Practice

```html
<button class="rounded-lg bg-indigo-600 px-4 py-2 text-white hover:bg-indigo-500">
  Publish
</button>
```

Every design decision — spacing, color, radius — comes from the configured
scale, which is why utility soup still ends up visually consistent.

## When It Pays Off

Component-heavy codebases benefit most: the utilities live next to the markup
they style, dead styles disappear with the component that owned them, and the
production build purges everything unused. For one-off marketing pages, a
stylesheet may still be less typing.
"#.to_string(),
            cover_image_url: fixture_url("https://images.unsplash.com/photo-1618788372246-79faff0c3742"),
            published_on: date!(2023 - 10 - 18),
            author_id: AuthorId::from("author-3"),
            tags: vec![
                "TailwindCSS".to_string(),
                "CSS".to_string(),
                "Web Design".to_string(),
                "Frontend".to_string(),
            ],
            featured: false,
            trending: true,
        },
    ]
}

pub fn comments() -> Vec<CommentRecord> {
    vec![
        CommentRecord {
            id: CommentId::from("comment-1"),
            post_id: PostId::from("post-1"),
            author_id: AuthorId::from("author-2"),
            body: "Great article! Very informative.".to_string(),
            posted_on: date!(2023 - 05 - 16),
            likes: 5,
            parent_id: None,
        },
        CommentRecord {
            id: CommentId::from("comment-2"),
            post_id: PostId::from("post-1"),
            author_id: AuthorId::from("author-3"),
            body: "I've been using Next.js with TypeScript for a while now and it's amazing!".to_string(),
            posted_on: date!(2023 - 05 - 17),
            likes: 3,
            parent_id: None,
        },
        CommentRecord {
            id: CommentId::from("comment-3"),
            post_id: PostId::from("post-1"),
            author_id: AuthorId::from("author-2"),
            body: "Have you tried using the new App Router?".to_string(),
            posted_on: date!(2023 - 05 - 17),
            likes: 2,
            parent_id: Some(CommentId::from("comment-2")),
        },
    ]
}
